use dtlogger::core::registry::{
    TOTAL_LINES, all_lines, find_line, lines_by_section, neighbours, section_of,
};
use dtlogger::errors::AppError;
use dtlogger::models::line::Section;

#[test]
fn registry_has_39_lines_in_order() {
    let lines = all_lines();
    assert_eq!(lines.len(), TOTAL_LINES as usize);
    for (i, l) in lines.iter().enumerate() {
        assert_eq!(l.number as usize, i + 1);
        assert_eq!(l.name, format!("Line {}", i + 1));
    }
}

#[test]
fn sections_follow_line_ranges() {
    assert_eq!(section_of(1).unwrap(), Section::PcLine);
    assert_eq!(section_of(7).unwrap(), Section::PcLine);
    assert_eq!(section_of(8).unwrap(), Section::PelletLine);
    assert_eq!(section_of(16).unwrap(), Section::Extruded);
    assert_eq!(section_of(17).unwrap(), Section::HandKettle);
    assert_eq!(section_of(31).unwrap(), Section::TwinScrew);
    assert_eq!(section_of(32).unwrap(), Section::Sheeted1);
    assert_eq!(section_of(39).unwrap(), Section::Sheeted2);
}

#[test]
fn section_of_rejects_out_of_range_numbers() {
    assert!(matches!(section_of(0), Err(AppError::InvalidLineNumber(0))));
    assert!(matches!(section_of(40), Err(AppError::InvalidLineNumber(40))));
}

#[test]
fn sections_cover_every_line_once() {
    let groups = lines_by_section();
    assert_eq!(groups.len(), 7);

    let sizes: Vec<usize> = groups.iter().map(|(_, l)| l.len()).collect();
    assert_eq!(sizes, vec![7, 3, 6, 7, 8, 6, 2]);
    assert_eq!(sizes.iter().sum::<usize>(), 39);

    for (section, lines) in groups {
        assert!(lines.iter().all(|l| l.section == section));
    }
}

#[test]
fn find_line_accepts_names_and_numbers() {
    assert_eq!(find_line("Line 5").unwrap().number, 5);
    assert_eq!(find_line("line 12").unwrap().number, 12);
    assert_eq!(find_line(" 39 ").unwrap().name, "Line 39");
}

#[test]
fn find_line_rejects_unknown_lines() {
    assert!(matches!(find_line("Line 40"), Err(AppError::InvalidLineNumber(40))));
    assert!(matches!(find_line("Oven"), Err(AppError::InvalidLine(_))));
}

#[test]
fn neighbours_wrap_around() {
    let first = find_line("1").unwrap();
    assert_eq!(neighbours(first), ("Line 39", "Line 2"));

    let last = find_line("39").unwrap();
    assert_eq!(neighbours(last), ("Line 38", "Line 1"));

    let mid = find_line("20").unwrap();
    assert_eq!(neighbours(mid), ("Line 19", "Line 21"));
}

#[test]
fn line_label_includes_section() {
    let l = find_line("9").unwrap();
    assert_eq!(l.section.as_str(), "Pellet Line");
    assert!(l.label().contains("Line 9"));
}
