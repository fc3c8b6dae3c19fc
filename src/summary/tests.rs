use super::*;
use crate::dataset::ClinicalDataset;

fn small_dataset() -> ClinicalDataset {
    ClinicalDataset {
        feature_names: vec!["age".to_string(), "ejection_fraction".to_string()],
        rows: vec![
            vec![60.0, 20.0],
            vec![70.0, 30.0],
            vec![40.0, 60.0],
            vec![50.0, 50.0],
            vec![80.0, 25.0],
        ],
    }
}

#[test]
fn test_build_groups_by_label() {
    let dataset = small_dataset();
    let labels = vec![0, 0, 1, 1, 0];
    let summary = ClusterSummary::build(&labels, &dataset, 2);

    assert_eq!(summary.rows.len(), 2);
    assert_eq!(summary.rows[0].count, 3);
    assert_eq!(summary.rows[1].count, 2);
    assert!((summary.rows[0].means[0] - 70.0).abs() < 1e-9);
    assert!((summary.rows[0].means[1] - 25.0).abs() < 1e-9);
    assert!((summary.rows[1].means[0] - 45.0).abs() < 1e-9);
    assert!((summary.rows[1].means[1] - 55.0).abs() < 1e-9);
}

#[test]
fn test_rows_are_in_ascending_cluster_order() {
    let dataset = small_dataset();
    let labels = vec![2, 1, 0, 1, 2];
    let summary = ClusterSummary::build(&labels, &dataset, 3);

    let order: Vec<usize> = summary.rows.iter().map(|row| row.cluster).collect();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn test_counts_sum_to_record_count() {
    let dataset = small_dataset();
    let labels = vec![0, 1, 2, 1, 0];
    let summary = ClusterSummary::build(&labels, &dataset, 3);

    assert_eq!(summary.total_count(), dataset.n_records());
}

#[test]
fn test_empty_cluster_gets_a_zero_row() {
    let dataset = small_dataset();
    let labels = vec![0, 0, 0, 0, 0];
    let summary = ClusterSummary::build(&labels, &dataset, 2);

    assert_eq!(summary.rows[1].count, 0);
    assert!(summary.rows[1].means.iter().all(|mean| *mean == 0.0));
}

#[test]
fn test_delimited_header_and_formatting() {
    let dataset = small_dataset();
    let labels = vec![0, 0, 1, 1, 0];
    let summary = ClusterSummary::build(&labels, &dataset, 2);

    let text = summary.to_delimited();
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), "Cluster;N_Pacientes;age;ejection_fraction");
    assert_eq!(lines.next().unwrap(), "0;3;70.00;25.00");
    assert_eq!(lines.next().unwrap(), "1;2;45.00;55.00");
    assert_eq!(lines.next(), None);
}

#[test]
fn test_render_contains_headers_and_values() {
    let dataset = small_dataset();
    let labels = vec![0, 0, 1, 1, 0];
    let summary = ClusterSummary::build(&labels, &dataset, 2);

    let table = summary.render();
    assert!(table.contains("Cluster"));
    assert!(table.contains("N_Pacientes"));
    assert!(table.contains("ejection_fraction"));
    assert!(table.contains("70.00"));
    assert!(table.contains("55.00"));
}
