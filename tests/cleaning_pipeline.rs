use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use employee_data_cleaner::{IngestionError, clean_file};
use employee_data_cleaner::ingestion::IngestionOptions;
use employee_data_cleaner::ingestion::csv::ingest_csv_from_reader;
use employee_data_cleaner::processing::{FillPolicy, normalize, normalize_with};
use employee_data_cleaner::output::write_csv_to_writer;
use employee_data_cleaner::types::{DataSet, DataType};
use regex::Regex;

fn tmp_file(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("employee-data-cleaner-{tag}-{nanos}.csv"))
}

fn read_records(path: &Path) -> Vec<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    rdr.records()
        .map(|r| r.unwrap().iter().map(str::to_owned).collect())
        .collect()
}

fn load(input: &str) -> DataSet {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());
    ingest_csv_from_reader(&mut rdr).unwrap()
}

const HEADER: &str = "Employee_ID,Full_Name,Department,Position,Gender,Age,Salary,Email,Hire_Date";

/// Clean a single-row table and return the rendered cell for `column`.
fn clean_one(row: &str, column: &str) -> String {
    let ds = load(&format!("{HEADER}\n{row}\n"));
    let cleaned = normalize(ds).unwrap().dataset;
    let idx = cleaned.schema.index_of(column).unwrap();
    cleaned.rows[0][idx].to_string()
}

#[test]
fn cleans_fixture_file_end_to_end() {
    let out = tmp_file("fixture");
    let report = clean_file(
        "tests/fixtures/messy_employees.csv",
        &out,
        &IngestionOptions::default(),
    )
    .unwrap();

    assert_eq!(report.input_rows, 6);
    assert_eq!(report.output_rows, 5);
    assert_eq!(report.duplicates_removed, 1);
    assert_eq!(report.blank_rows, 1);
    assert_eq!(
        read_records(&out),
        read_records(Path::new("tests/fixtures/cleaned_employees.csv"))
    );

    let _ = std::fs::remove_file(out);
}

#[test]
fn cleaning_its_own_output_changes_nothing() {
    let first = tmp_file("first");
    let second = tmp_file("second");
    clean_file("tests/fixtures/messy_employees.csv", &first, &IngestionOptions::default()).unwrap();
    let report = clean_file(&first, &second, &IngestionOptions::default()).unwrap();

    assert_eq!(report.duplicates_removed, 0);
    assert_eq!(read_records(&first), read_records(&second));

    let _ = std::fs::remove_file(first);
    let _ = std::fs::remove_file(second);
}

#[test]
fn load_failure_writes_nothing() {
    let out = tmp_file("never-written");
    let err = clean_file(
        "tests/fixtures/does_not_exist.csv",
        &out,
        &IngestionOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(err, IngestionError::Csv(_) | IngestionError::Io(_)), "{err}");
    assert!(!out.exists());
}

#[test]
fn documented_examples() {
    let base = "7,Ann Lee,Ops,Lead,F,30,60000,ann@example.com,2020-01-01";
    let with = |col: usize, value: &str| {
        let mut cells: Vec<&str> = base.split(',').collect();
        cells[col] = value;
        cells.join(",")
    };

    assert_eq!(clean_one(&with(5, "200"), "Age"), "Invalid Data");
    assert_eq!(clean_one(&with(6, "-50"), "Salary"), "Invalid Data");
    assert_eq!(clean_one(&with(6, "1500000"), "Salary"), "Invalid Data");
    assert_eq!(clean_one(&with(7, "\"\"\" John@Example.com \"\"\""), "Email"), "John@example.com");
    assert_eq!(clean_one(&with(4, "BOY"), "Gender"), "Male");
    assert_eq!(clean_one(&with(8, "03/15/2020"), "Hire_Date"), "2020-03-15");
    assert_eq!(clean_one(&with(0, "42"), "Employee_ID"), "000042");
    assert_eq!(clean_one(&with(0, "-42"), "Employee_ID"), "00042");
    assert_eq!(clean_one(&with(6, "0.001"), "Salary"), "Invalid Data");
    assert_eq!(clean_one(&with(8, "15-Mar-2020"), "Hire_Date"), "2020-03-15");
    assert_eq!(clean_one(&with(8, "2020-03-15T08:30:00Z"), "Hire_Date"), "2020-03-15");
}

#[test]
fn cleaned_schema_matches_the_cells_it_holds() {
    let ds = load(&format!(
        "{HEADER},Floor,Rating\n\
         1,A,B,C,m,30,100,a@b.io,2020-01-01,3,4.5\n\
         2,D,E,F,f,31,200,c@d.io,2020-01-02,,5\n"
    ));
    let cleaned = normalize(ds).unwrap().dataset;
    let type_of = |name: &str| cleaned.schema.fields[cleaned.schema.index_of(name).unwrap()].data_type;

    for name in [
        "Employee_ID", "Full_Name", "Department", "Position", "Gender", "Age", "Salary", "Email",
        "Hire_Date", "Floor",
    ] {
        assert_eq!(type_of(name), DataType::Utf8, "{name}");
    }
    assert_eq!(type_of("Rating"), DataType::Float64);
    for (field, cell) in cleaned.schema.fields.iter().zip(&cleaned.rows[1]) {
        if field.data_type == DataType::Utf8 {
            assert!(cell.as_str().is_some(), "{} holds {cell:?}", field.name);
        }
    }
}

#[test]
fn sub_cent_salary_does_not_break_idempotence() {
    let first = normalize(load(&format!("{HEADER}\n1,A,B,C,m,30,0.001,a@b.io,2020-01-01\n")))
        .unwrap()
        .dataset;
    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_csv_to_writer(&first, &mut wtr).unwrap();
    let written = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

    let second = normalize(load(&written)).unwrap().dataset;
    assert_eq!(first.rows, second.rows);
}

#[test]
fn row_count_never_grows_and_duplicates_keep_first_position() {
    let ds = load(&format!(
        "{HEADER}\n\
         1,A,B,C,m,30,100,a@b.io,2020-01-01\n\
         2,D,E,F,f,31,200,c@d.io,2020-01-02\n\
         1,A,B,C,m,30,100,a@b.io,2020-01-01\n\
         3,G,H,I,x,32,300,e@f.io,2020-01-03\n\
         2,D,E,F,f,31,200,c@d.io,2020-01-02\n"
    ));
    let cleaned = normalize(ds).unwrap();
    let ids: Vec<String> = cleaned.dataset.rows.iter().map(|r| r[0].to_string()).collect();

    assert_eq!(ids, vec!["000001", "000002", "000003"]);
    assert_eq!(cleaned.report.duplicates_removed, 2);
}

#[test]
fn ids_equal_after_padding_are_duplicates() {
    let ds = load(&format!(
        "{HEADER}\n\
         1,A,B,C,m,30,100,a@b.io,2020-01-01\n\
         000001,A,B,C,m,30,100,a@b.io,2020-01-01\n"
    ));
    assert_eq!(normalize(ds).unwrap().report.duplicates_removed, 1);
}

#[test]
fn fill_policy_controls_blank_text_after_stripping() {
    let input = format!("{HEADER},Notes\n1,A,B,C,m,30,100,a@b.io,2020-01-01,???\n");

    let default = normalize(load(&input)).unwrap().dataset;
    assert_eq!(default.rows[0][9].to_string(), "Not provided");

    let strict = normalize_with(load(&input), FillPolicy::MissingOnly).unwrap().dataset;
    assert_eq!(strict.rows[0][9].to_string(), "");
}

#[test]
fn every_output_cell_satisfies_its_column_contract() {
    let out = tmp_file("contracts");
    clean_file("tests/fixtures/messy_employees.csv", &out, &IngestionOptions::default()).unwrap();
    let records = read_records(&out);
    let header = &records[0];
    let col = |name: &str| header.iter().position(|h| h == name).unwrap();

    let salary_re = Regex::new(r"^\$[0-9,]+\.[0-9]{2}$").unwrap();
    let date_re = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    let email_re = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();

    for row in &records[1..] {
        assert_eq!(row[col("Employee_ID")].len(), 6);

        let age = &row[col("Age")];
        assert!(
            age == "Invalid Data" || age.parse::<u32>().is_ok_and(|a| (18..=65).contains(&a)),
            "age {age:?}"
        );

        let salary = &row[col("Salary")];
        assert!(salary == "Invalid Data" || salary_re.is_match(salary), "salary {salary:?}");

        let email = &row[col("Email")];
        assert!(email == "Invalid email" || email_re.is_match(email), "email {email:?}");

        let hire = &row[col("Hire_Date")];
        assert!(hire == "Invalid date" || date_re.is_match(hire), "hire date {hire:?}");

        let gender = row[col("Gender")].as_str();
        assert!(["Male", "Female", "Not specified"].contains(&gender), "gender {gender:?}");
    }

    let _ = std::fs::remove_file(out);
}
