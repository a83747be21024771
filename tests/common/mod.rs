//! Shared workbook fixture for integration tests

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

pub enum Cell {
    S(&'static str),
    N(f64),
    Blank,
}

use Cell::{Blank, N, S};

fn write_sheet(workbook: &mut Workbook, name: &str, rows: &[Vec<Cell>]) {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name).unwrap();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                S(s) => {
                    worksheet.write_string(r as u32, c as u16, *s).unwrap();
                }
                N(n) => {
                    worksheet.write_number(r as u32, c as u16, *n).unwrap();
                }
                Blank => {}
            }
        }
    }
}

/// Workbook with two universities:
///
/// - `MGKVP 1`: full identity columns, two students, one duplicated name
/// - `MGKVP 2`: no father column
/// - `BHU 1`: missing the admission column
pub fn write_marksheet(dir: &Path) -> PathBuf {
    let path = dir.join("marks.xlsx");
    let mut workbook = Workbook::new();

    write_sheet(
        &mut workbook,
        "MGKVP 1",
        &[
            vec![
                S("Student Name"),
                S("Admission No."),
                S("Father Name"),
                S("Maths"),
                S("English"),
            ],
            vec![S("Asha Verma"), N(101.0), S("Mohan Verma"), N(78.25), S("A+")],
            vec![S("Ravi Kumar"), N(102.0), Blank, S("Absent"), S("1,234.5")],
            vec![S("Asha Verma"), N(199.0), S("Other"), N(10.0), S("B")],
        ],
    );
    write_sheet(
        &mut workbook,
        "MGKVP 2",
        &[
            vec![S(" Student Name "), S("Admission No."), S("Physics")],
            vec![S("Neha Singh"), S("MG-2-7"), S("85%")],
        ],
    );
    write_sheet(
        &mut workbook,
        "BHU 1",
        &[
            vec![S("Student Name"), S("Chemistry")],
            vec![S("Arjun"), N(55.0)],
        ],
    );

    workbook.save(&path).unwrap();
    path
}
