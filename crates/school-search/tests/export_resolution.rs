use school_search::pipeline::resolve_schools;
use school_search::upstream::load_export;

#[test]
fn export_rows_resolve_into_canonical_schools() {
    let csv = "Id,Name,City,State,Country,Cursor\n\
1,The University of Springfield,Springfield,IL,US-IL,a\n\
2,UNIVERSITY OF SPRINGFIELD,Springfield,IL,US-IL,b\n\
3,University of Springfield at Shelbyville,Shelbyville,IL,US-IL,c\n\
4,Boston College,Chestnut Hill,MA,US-MA,d\n";

    let records = load_export(csv.as_bytes()).expect("export parses");
    assert_eq!(records.len(), 4);

    let schools = resolve_schools(records);
    assert_eq!(schools.len(), 2);

    let springfield = &schools[0];
    assert_eq!(springfield.canonical_name, "University Of Springfield");
    assert_eq!(springfield.canonical_country, Some("IL".to_string()));
    // Rows 1 and 2 collapse in exact dedup; row 3 joins as a branch campus.
    assert_eq!(springfield.branches.len(), 2);

    assert_eq!(schools[1].canonical_name, "Boston College");
}

#[test]
fn export_without_countries_resolves_with_absent_country() {
    let csv = "Id,Name,City,State\n1,Riverdale Academy,Riverdale,NY\n";

    let records = load_export(csv.as_bytes()).expect("export parses");
    let schools = resolve_schools(records);

    assert_eq!(schools.len(), 1);
    assert_eq!(schools[0].canonical_name, "Riverdale Academy");
    assert_eq!(schools[0].canonical_country, None);
}
