//! Interactive menu loop: the whole operational surface of the tool.

use crate::app::App;
use crate::errors::AppResult;
use crate::ui::actions;
use crate::ui::messages::{error, header, prompt};

fn print_menu() {
    println!();
    println!("1) Registrar empleado");
    println!("2) Check-in");
    println!("3) Registros de hoy");
    println!("4) Jornadas");
    println!("5) Reportes");
    println!("6) Exportar");
    println!("7) Sincronizar ahora");
    println!("8) Depurar datos");
    println!("9) Log de operaciones");
    println!("10) Info del almacén");
    println!("0) Salir");
}

/// Run the menu until the operator exits or the input ends.
pub fn run(app: &mut App) -> AppResult<()> {
    header("JORNALERO — control de jornales");

    loop {
        print_menu();

        let Some(choice) = prompt("Opción")? else {
            break;
        };

        let result = match choice.as_str() {
            "" => Ok(()),
            "0" | "q" => break,
            "1" => actions::enroll::handle(app),
            "2" => actions::checkin::handle(app),
            "3" => actions::records::handle(app),
            "4" => actions::workdays::handle(app),
            "5" => actions::reports::handle(app),
            "6" => actions::export::handle(app),
            "7" => actions::sync::handle(app),
            "8" => actions::purge::handle(app),
            "9" => actions::maintenance::show_oplog(app),
            "10" => actions::maintenance::show_store_info(app),
            other => {
                println!("Opción desconocida: {other}");
                Ok(())
            }
        };

        // operation errors are reported and the menu continues
        if let Err(e) = result {
            error(e);
        }
    }

    Ok(())
}
