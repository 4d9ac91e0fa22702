use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const SHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Writes a minimal `.xlsx` workbook, one worksheet per entry in `sheets`.
///
/// Cells that parse as numbers are stored as numeric values, blank strings
/// are left out and everything else becomes an inline string.
pub fn write_xlsx(path: &Path, sheets: &[&[&[&str]]]) {
    let file = File::create(path).expect("failed to create workbook");
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    let mut parts = vec![
        ("[Content_Types].xml".to_string(), content_types(sheets.len())),
        ("_rels/.rels".to_string(), package_rels()),
        ("xl/workbook.xml".to_string(), workbook(sheets.len())),
        ("xl/_rels/workbook.xml.rels".to_string(), workbook_rels(sheets.len())),
    ];
    for (i, rows) in sheets.iter().enumerate() {
        parts.push((format!("xl/worksheets/sheet{}.xml", i + 1), worksheet(rows)));
    }

    for (name, body) in parts {
        zip.start_file(name, options).expect("failed to start zip entry");
        zip.write_all(body.as_bytes()).expect("failed to write zip entry");
    }
    zip.finish().expect("failed to finish workbook");
}

fn content_types(count: usize) -> String {
    let overrides: String = (1..=count)
        .map(|i| {
            format!(
                r#"<Override PartName="/xl/worksheets/sheet{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>{overrides}</Types>"#
    )
}

fn package_rels() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="{PKG_REL_NS}"><Relationship Id="rId1" Type="{REL_NS}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#
    )
}

fn workbook(count: usize) -> String {
    let sheets: String = (1..=count)
        .map(|i| format!(r#"<sheet name="Sheet{i}" sheetId="{i}" r:id="rId{i}"/>"#))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="{SHEET_NS}" xmlns:r="{REL_NS}"><sheets>{sheets}</sheets></workbook>"#
    )
}

fn workbook_rels(count: usize) -> String {
    let rels: String = (1..=count)
        .map(|i| {
            format!(
                r#"<Relationship Id="rId{i}" Type="{REL_NS}/worksheet" Target="worksheets/sheet{i}.xml"/>"#
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="{PKG_REL_NS}">{rels}</Relationships>"#
    )
}

fn worksheet(rows: &[&[&str]]) -> String {
    let mut data = String::new();
    for (r, cells) in rows.iter().enumerate() {
        let row_num = r + 1;
        data.push_str(&format!(r#"<row r="{row_num}">"#));
        for (c, value) in cells.iter().enumerate() {
            if value.trim().is_empty() {
                continue;
            }
            let cell_ref = format!("{}{}", char::from(b'A' + c as u8), row_num);
            if value.parse::<f64>().is_ok() {
                data.push_str(&format!(r#"<c r="{cell_ref}"><v>{value}</v></c>"#));
            } else {
                data.push_str(&format!(
                    r#"<c r="{cell_ref}" t="inlineStr"><is><t>{}</t></is></c>"#,
                    escape(value)
                ));
            }
        }
        data.push_str("</row>");
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="{SHEET_NS}"><sheetData>{data}</sheetData></worksheet>"#
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
