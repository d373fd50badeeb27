use std::fs;
use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};
use csv_bundle::ToolError;
use csv_bundle::convert::{self, xlsx_output_path};
use csv_bundle::discover::{FileMetadata, list_csv_files};
use csv_bundle::io::excel_write;
use csv_bundle::workbook::MAX_COLUMN;
use tempfile::tempdir;

fn read_sheet(path: &Path, name: &str) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("workbook opened");
    let range = workbook
        .worksheet_range(name)
        .expect("sheet present")
        .expect("sheet readable");
    range
        .rows()
        .map(|row| {
            row.iter()
                .filter_map(|cell| match cell {
                    DataType::String(value) => Some(value.clone()),
                    DataType::Empty => None,
                    other => Some(other.to_string()),
                })
                .collect()
        })
        .collect()
}

fn sheet_names(path: &Path) -> Vec<String> {
    let workbook: Xlsx<_> = open_workbook(path).expect("workbook opened");
    workbook.sheet_names().to_vec()
}

#[test]
fn one_sheet_per_csv_file_with_matching_cells() {
    let temp_dir = tempdir().expect("temporary directory");
    let src = temp_dir.path().join("src");
    let dest = temp_dir.path().join("dest");
    fs::create_dir_all(&src).expect("src created");
    fs::create_dir_all(&dest).expect("dest created");

    fs::write(src.join("people.csv"), "name,age\nAlice,30\nBob,41\n").expect("people written");
    fs::write(src.join("cities.csv"), "city\r\nOslo\r\nLima\r\nPerth\r\n").expect("cities written");
    fs::write(src.join("ignored.txt"), "not,a,sheet\n").expect("txt written");

    let output = convert::csv_dir_to_xlsx(&src, &dest).expect("conversion succeeded");

    assert_eq!(output.parent(), Some(dest.as_path()));
    let file_name = output.file_name().unwrap().to_str().unwrap();
    assert!(file_name.starts_with("output_") && file_name.ends_with(".xlsx"));

    let names = sheet_names(&output);
    assert_eq!(names, vec!["cities".to_string(), "people".to_string()]);

    let people = read_sheet(&output, "people");
    assert_eq!(
        people,
        vec![
            vec!["name".to_string(), "age".to_string()],
            vec!["Alice".to_string(), "30".to_string()],
            vec!["Bob".to_string(), "41".to_string()],
        ]
    );

    let cities = read_sheet(&output, "cities");
    assert_eq!(cities.len(), 4);
    assert!(cities.iter().all(|row| row.len() == 1));
    assert_eq!(cities[3], vec!["Perth".to_string()]);
}

#[test]
fn numbers_stay_text_cells() {
    let temp_dir = tempdir().expect("temporary directory");
    fs::write(temp_dir.path().join("n.csv"), "1,2.5\n").expect("csv written");

    let files = list_csv_files(temp_dir.path()).expect("listed");
    let workbook = convert::build_workbook_from_csv(&files).expect("workbook built");
    let xlsx_path = temp_dir.path().join("n.xlsx");
    excel_write::write_workbook(&xlsx_path, &workbook).expect("Excel written");

    let mut reader: Xlsx<_> = open_workbook(&xlsx_path).expect("workbook opened");
    let range = reader
        .worksheet_range("n")
        .expect("sheet present")
        .expect("sheet readable");
    let row = range.rows().next().expect("first row");
    assert_eq!(row[0], DataType::String("1".to_string()));
    assert_eq!(row[1], DataType::String("2.5".to_string()));
}

#[test]
fn quoted_commas_split_into_separate_cells() {
    let temp_dir = tempdir().expect("temporary directory");
    fs::write(temp_dir.path().join("quoted.csv"), "\"a,b\",c\n").expect("csv written");

    let files = list_csv_files(temp_dir.path()).expect("listed");
    let workbook = convert::build_workbook_from_csv(&files).expect("workbook built");

    let sheet = workbook.sheet("quoted").expect("sheet built");
    assert_eq!(sheet.cell_count(), 3);
    assert_eq!(sheet.cell(1, 1), Some("\"a"));
    assert_eq!(sheet.cell(2, 1), Some("b\""));
    assert_eq!(sheet.cell(3, 1), Some("c"));
}

#[test]
fn placeholder_sheet_is_not_written() {
    let temp_dir = tempdir().expect("temporary directory");
    fs::write(temp_dir.path().join("only.csv"), "x\n").expect("csv written");

    let files = list_csv_files(temp_dir.path()).expect("listed");
    let workbook = convert::build_workbook_from_csv(&files).expect("workbook built");

    let names: Vec<&str> = workbook.sheets().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["only"]);
}

#[test]
fn sheet_names_differing_in_case_collapse_to_the_last_file() {
    let temp_dir = tempdir().expect("temporary directory");
    let src = temp_dir.path().join("src");
    let dest = temp_dir.path().join("dest");
    fs::create_dir_all(&src).expect("src created");
    fs::create_dir_all(&dest).expect("dest created");

    fs::write(src.join("Data.csv"), "a\n").expect("upper written");
    fs::write(src.join("data.csv"), "b\n").expect("lower written");

    let output = convert::csv_dir_to_xlsx(&src, &dest).expect("conversion succeeded");

    assert_eq!(sheet_names(&output), vec!["Data".to_string()]);
    assert_eq!(read_sheet(&output, "Data"), vec![vec!["b".to_string()]]);
}

#[test]
fn reused_base_names_share_one_sheet() {
    let temp_dir = tempdir().expect("temporary directory");
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");
    fs::create_dir_all(&first).expect("first created");
    fs::create_dir_all(&second).expect("second created");
    fs::write(first.join("report.csv"), "old,kept\nold\n").expect("first written");
    fs::write(second.join("report.csv"), "new\n").expect("second written");

    let files: Vec<FileMetadata> = [&first, &second]
        .into_iter()
        .map(|dir| FileMetadata {
            name_without_extension: "report".to_string(),
            full_path: dir.join("report.csv"),
        })
        .collect();
    let workbook = convert::build_workbook_from_csv(&files).expect("workbook built");
    let xlsx_path = temp_dir.path().join("report.xlsx");
    excel_write::write_workbook(&xlsx_path, &workbook).expect("Excel written");

    assert_eq!(sheet_names(&xlsx_path), vec!["report".to_string()]);
    assert_eq!(
        read_sheet(&xlsx_path, "report"),
        vec![
            vec!["new".to_string(), "kept".to_string()],
            vec!["old".to_string()],
        ]
    );
}

#[test]
fn empty_source_directory_is_fatal() {
    let temp_dir = tempdir().expect("temporary directory");
    let src = temp_dir.path().join("src");
    fs::create_dir(&src).expect("src created");
    fs::write(src.join("readme.md"), "nothing here").expect("file written");

    let err = convert::csv_dir_to_xlsx(&src, temp_dir.path()).expect_err("must fail");
    assert!(matches!(err, ToolError::NoCsvFiles(path) if path == src));
}

#[test]
fn oversized_row_aborts_without_writing_output() {
    let temp_dir = tempdir().expect("temporary directory");
    let src = temp_dir.path().join("src");
    let dest = temp_dir.path().join("dest");
    fs::create_dir_all(&src).expect("src created");
    fs::create_dir_all(&dest).expect("dest created");

    fs::write(src.join("a_ok.csv"), "fine\n").expect("ok written");
    let too_wide = vec!["v"; MAX_COLUMN as usize + 1].join(",");
    fs::write(src.join("b_wide.csv"), format!("{too_wide}\n")).expect("wide written");

    let err = convert::csv_dir_to_xlsx(&src, &dest).expect_err("must fail");
    assert!(matches!(err, ToolError::CellOutOfRange { ref sheet, .. } if sheet == "b_wide"));

    let written = fs::read_dir(&dest).expect("dest listed").count();
    assert_eq!(written, 0);
}

#[test]
fn output_path_uses_timestamp() {
    let path = xlsx_output_path(Path::new("/tmp/out"), 1_700_000_000);
    assert_eq!(path, Path::new("/tmp/out/output_1700000000.xlsx"));
}
