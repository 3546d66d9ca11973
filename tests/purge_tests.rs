mod common;
use common::{checkin, enroll, run_session, setup_test_store};
use predicates::prelude::*;

const DESMALEZADO: usize = 6;

fn seed(store: &str, test: &str) {
    enroll(store, test, "W1", "Ana", 0.1);
    checkin(store, test, 3, DESMALEZADO, "4", 0.1).success();
}

#[test]
fn test_purge_today_removes_todays_records() {
    let store = setup_test_store("purge_today");
    seed(&store, "purge_today");

    run_session(&store, "8\n1\ns\ns\n0\n".to_string())
        .success()
        .stdout(predicate::str::contains("Registros eliminados: 1"));

    run_session(&store, "3\n0\n".to_string())
        .success()
        .stdout(predicate::str::contains("Entradas hoy: 0"))
        .stdout(predicate::str::contains("No hay registros hoy"));
}

#[test]
fn test_purge_today_aborts_without_second_confirmation() {
    let store = setup_test_store("purge_today_abort");
    seed(&store, "purge_today_abort");

    run_session(&store, "8\n1\ns\nn\n0\n".to_string())
        .success()
        .stdout(predicate::str::contains("Eliminación cancelada"));

    run_session(&store, "3\n0\n".to_string())
        .success()
        .stdout(predicate::str::contains("Entradas hoy: 1"));
}

#[test]
fn test_clear_workers_keeps_the_ledger() {
    let store = setup_test_store("purge_workers");
    seed(&store, "purge_workers");

    run_session(&store, "8\n2\ns\ns\n0\n".to_string())
        .success()
        .stdout(predicate::str::contains("Empleados eliminados: 1"));

    // entries survive, enrollment is gone
    run_session(&store, "3\n0\n".to_string())
        .success()
        .stdout(predicate::str::contains("Empleados: 0   Entradas hoy: 1"));
}

#[test]
fn test_wipe_requires_the_exact_phrase() {
    let store = setup_test_store("wipe_wrong_phrase");
    seed(&store, "wipe_wrong_phrase");

    run_session(&store, "8\n3\ns\neliminar\n0\n".to_string())
        .success()
        .stdout(predicate::str::contains(
            "Palabra incorrecta. Eliminación cancelada por seguridad.",
        ));

    // nothing was touched
    run_session(&store, "3\n0\n".to_string())
        .success()
        .stdout(predicate::str::contains("Empleados: 1   Entradas hoy: 1"));
}

#[test]
fn test_wipe_with_phrase_erases_everything() {
    let store = setup_test_store("wipe_full");
    seed(&store, "wipe_full");

    run_session(&store, "8\n3\ns\nELIMINAR\n0\n".to_string())
        .success()
        .stdout(predicate::str::contains("ADVERTENCIA CRÍTICA"))
        .stdout(predicate::str::contains(
            "Datos eliminados: 1 empleados, 1 jornadas",
        ));

    // the wipe survives a restart of the tool
    run_session(&store, "3\n0\n".to_string())
        .success()
        .stdout(predicate::str::contains("Empleados: 0   Entradas hoy: 0"));
}

#[test]
fn test_wipe_with_nothing_to_delete() {
    let store = setup_test_store("wipe_empty");

    run_session(&store, "8\n3\n0\n".to_string())
        .success()
        .stdout(predicate::str::contains("No hay datos para eliminar"));
}
