mod common;
use common::{checkin, enroll, run_session, setup_test_store, temp_out};
use predicates::prelude::*;
use std::fs;

const DESMALEZADO: usize = 6;

fn seed(store: &str, test: &str) {
    enroll(store, test, "W1", "Ana", 0.1);
    checkin(store, test, 3, DESMALEZADO, "4", 0.1).success();
}

#[test]
fn test_export_today_csv() {
    let store = setup_test_store("export_today_csv");
    seed(&store, "export_today_csv");
    let out = temp_out("export_today_csv", "csv");

    run_session(&store, format!("6\n1\n{out}\n0\n"))
        .success()
        .stdout(predicate::str::contains("Exportación CSV completada"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("\"Hora\",\"Nombre\",\"ID\""));
    assert!(content.contains("\"Ana\""));
    assert!(content.contains("\"Desmalezado\""));
    assert!(content.contains("30000"));
    fs::remove_file(&out).ok();
}

#[test]
fn test_export_workdays_csv() {
    let store = setup_test_store("export_workdays_csv");
    seed(&store, "export_workdays_csv");
    let out = temp_out("export_workdays_csv", "csv");

    run_session(&store, format!("6\n2\n{out}\n0\n")).success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("\"Empleado\",\"ID\",\"Ciclo\""));
    assert!(content.contains("\"Nivel 3\""));
    assert!(content.contains("30000"));
    fs::remove_file(&out).ok();
}

#[test]
fn test_export_report_csv_has_totals() {
    let store = setup_test_store("export_report_csv");
    seed(&store, "export_report_csv");
    let out = temp_out("export_report_csv", "csv");

    run_session(&store, format!("6\n3\n{out}\n0\n"))
        .success()
        .stdout(predicate::str::contains("Exportación CSV completada"));

    // parse the file back: banner, header, the data row and the totals
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(&out)
        .unwrap();
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();

    assert_eq!(records[0][0], *"REPORTE COMPLETO DE JORNADAS");

    let data: Vec<&csv::StringRecord> = records
        .iter()
        .filter(|r| r.get(1).is_some_and(|f| f == "W1"))
        .collect();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0][0], *"Ana");
    assert_eq!(data[0][3], *"Desmalezado");
    assert_eq!(data[0][6], *"30000");

    let totals: Vec<&csv::StringRecord> = records
        .iter()
        .filter(|r| r.get(0).is_some_and(|f| f.starts_with("TOTAL")))
        .collect();
    assert_eq!(totals.len(), 3);
    assert_eq!(totals[0][0], *"TOTAL JORNADAS");
    assert_eq!(totals[0][1], *"1");
    // one 4-hour entry: nominal 60,000 vs stored 30,000
    assert_eq!(totals[1][1], *"$60,000");
    assert_eq!(totals[2][1], *"$30,000");

    fs::remove_file(&out).ok();
}

#[test]
fn test_export_pdf_writes_a_pdf() {
    let store = setup_test_store("export_pdf");
    seed(&store, "export_pdf");
    let out = temp_out("export_pdf", "pdf");

    run_session(&store, format!("6\n4\n{out}\n0\n")).success();

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    fs::remove_file(&out).ok();
}

#[test]
fn test_export_with_empty_ledger_warns() {
    let store = setup_test_store("export_empty");
    let out = temp_out("export_empty", "csv");

    run_session(&store, format!("6\n2\n{out}\n0\n"))
        .success()
        .stdout(predicate::str::contains("No hay jornadas para exportar"));
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_refuses_overwrite_when_declined() {
    let store = setup_test_store("export_no_overwrite");
    seed(&store, "export_no_overwrite");
    let out = temp_out("export_no_overwrite", "csv");
    fs::write(&out, "previo").unwrap();

    run_session(&store, format!("6\n2\n{out}\nn\n0\n"))
        .success()
        .stderr(predicate::str::contains("no se sobrescribió el archivo"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "previo");
    fs::remove_file(&out).ok();
}
