//! Interactive console front end for the lot tracker.
//!
//! All input validation lives here: the domain layer only ever sees
//! already-parsed numbers.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use lotflow_core::{LotNumber, ProductId};
use lotflow_inventory::InventoryService;

mod input;
mod menu;
mod render;

use input::prompt_parse;
use menu::MenuOption;

fn main() {
    lotflow_observability::init();
    tracing::info!("starting interactive inventory session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run(&mut stdin.lock(), &mut stdout.lock());

    // Top-level safety net: report and exit non-zero instead of panicking.
    if let Err(e) = result {
        eprintln!("unexpected error: {e}");
        std::process::exit(1);
    }
}

fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    let service = InventoryService::new();

    loop {
        writeln!(out, "{}", menu::MENU)?;
        let Some(choice) = prompt_parse::<i64, _, _>(input, out, "select > ")? else {
            return Ok(());
        };

        match MenuOption::from_code(choice) {
            Some(MenuOption::Receive) => handle_receive(input, out, &service)?,
            Some(MenuOption::Stage) => handle_stage(input, out, &service)?,
            Some(MenuOption::Dispatch) => handle_dispatch(input, out, &service)?,
            Some(MenuOption::ShowInventory) => {
                let report = service.build_report()?;
                write!(out, "{}", render::render_report(&report))?;
            }
            Some(MenuOption::Exit) => {
                writeln!(out, "Goodbye.")?;
                return Ok(());
            }
            None => writeln!(out, "Invalid selection.")?,
        }
    }
}

fn handle_receive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    service: &InventoryService,
) -> Result<()> {
    let Some(product_id) = prompt_parse::<ProductId, _, _>(input, out, "product id > ")? else {
        return Ok(());
    };
    let Some(lot_number) = prompt_parse::<LotNumber, _, _>(input, out, "lot number > ")? else {
        return Ok(());
    };
    let Some(quantity) = prompt_parse::<i32, _, _>(input, out, "quantity > ")? else {
        return Ok(());
    };

    service.receive_lot(product_id, lot_number, quantity)?;
    writeln!(out, "Received lot {lot_number} for product {product_id}.")?;
    Ok(())
}

fn handle_stage<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    service: &InventoryService,
) -> Result<()> {
    let Some(product_id) = prompt_parse::<ProductId, _, _>(input, out, "product id > ")? else {
        return Ok(());
    };

    match service.stage_for_outbound(product_id)? {
        Some(lot) => writeln!(out, "Staged: {}", render::describe_lot(&lot))?,
        None => writeln!(out, "No lots in receiving for product {product_id}.")?,
    }
    Ok(())
}

fn handle_dispatch<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    service: &InventoryService,
) -> Result<()> {
    let Some(product_id) = prompt_parse::<ProductId, _, _>(input, out, "product id > ")? else {
        return Ok(());
    };

    match service.dispatch_outbound(product_id)? {
        Some(lot) => writeln!(out, "Dispatched: {}", render::describe_lot(&lot))?,
        None => writeln!(out, "No lots staged for product {product_id}.")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        let mut input = io::Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn scripted_session_moves_a_lot_through_both_areas() {
        let transcript =
            run_script("1\n100\n1\n5\n1\n100\n2\n3\n4\n2\n100\n3\n100\n5\n");

        assert!(transcript.contains("Received lot 1 for product 100."));
        assert!(transcript.contains("--- Receiving ---"));
        // Two lots received, none staged yet: total quantity 8.
        assert!(transcript.contains(&format!("{:<12}: {:<12}", 100, 8)));
        assert!(transcript.contains("Staged: lot 1, quantity 5"));
        assert!(transcript.contains("Dispatched: lot 1, quantity 5"));
        assert!(transcript.contains("Goodbye."));
    }

    #[test]
    fn absence_is_reported_per_area() {
        let transcript = run_script("2\n999\n3\n999\n5\n");
        assert!(transcript.contains("No lots in receiving for product 999."));
        assert!(transcript.contains("No lots staged for product 999."));
    }

    #[test]
    fn unknown_menu_codes_are_rejected() {
        let transcript = run_script("9\n5\n");
        assert!(transcript.contains("Invalid selection."));
        assert!(transcript.contains("Goodbye."));
    }

    #[test]
    fn session_ends_cleanly_when_input_runs_out() {
        let transcript = run_script("1\n100\n");
        assert!(transcript.contains("--- Inventory Menu ---"));
        assert!(!transcript.contains("Goodbye."));
    }
}
