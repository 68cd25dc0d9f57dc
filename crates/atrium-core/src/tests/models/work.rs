use crate::{Creator, Work};

#[test]
fn test_creator_orcid_ids_skips_creators_without_one() {
    let work = Work::new(
        "Moomin".to_string(),
        vec![
            Creator {
                name: "John Smith".to_string(),
                orcid_id: Some("0000-0002-1825-0097".to_string()),
            },
            Creator {
                name: "Jane Doe".to_string(),
                orcid_id: None,
            },
        ],
    );

    let ids: Vec<&str> = work.creator_orcid_ids().collect();
    assert_eq!(ids, vec!["0000-0002-1825-0097"]);
}

#[test]
fn test_work_round_trips_through_json() {
    let work = Work::new("Moomin".to_string(), vec![]);

    let json = serde_json::to_string(&work).unwrap();
    let parsed: Work = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, work);
}
