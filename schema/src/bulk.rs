//! Bulk lead import: file checks, preview, and the downloadable template.

#[cfg(test)]
#[path = "bulk_test.rs"]
mod bulk_test;

/// MIME type of an `.xlsx` workbook.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// File name offered for the template download. The template is plain CSV,
/// which spreadsheet apps open and re-save as `.xlsx`.
pub const TEMPLATE_FILE_NAME: &str = "lead_template.csv";

/// MIME type of the template download.
pub const TEMPLATE_MIME: &str = "text/csv";

/// Template header row.
pub const TEMPLATE_HEADERS: [&str; 7] = ["Full Name", "Email", "Phone", "Position", "Source", "Priority", "Notes"];

const TEMPLATE_EXAMPLE: [&str; 7] = [
    "Raman",
    "raman@example.com",
    "9876543210",
    "Developer",
    "Advertisement",
    "High",
    "Some text here about the lead or additional notes about the lead.",
];

/// Whether a chosen file is accepted for bulk import.
#[must_use]
pub fn is_spreadsheet(file_name: &str, mime: &str) -> bool {
    mime == XLSX_MIME || file_name.to_ascii_lowercase().ends_with(".xlsx")
}

/// Split file text into preview rows: lines first, then commas. Blank lines
/// are dropped. No quoting rules apply.
#[must_use]
pub fn preview_rows(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| line.split(',').map(ToOwned::to_owned).collect())
        .collect()
}

/// CSV body of the downloadable template: header plus one example row.
#[must_use]
pub fn template_csv() -> String {
    format!("{}\n{}", TEMPLATE_HEADERS.join(","), TEMPLATE_EXAMPLE.join(","))
}

/// Form values of a bulk upload, minus the file bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkUploadForm {
    pub has_file: bool,
    pub category: String,
    /// Worker id; blank means leave the leads unassigned.
    pub assignee: String,
}

impl BulkUploadForm {
    /// Check the form before posting.
    ///
    /// # Errors
    ///
    /// Returns the toast message for the first missing value.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.has_file {
            return Err("Please select an Excel file.");
        }
        if self.category.trim().is_empty() {
            return Err("Please select a default category.");
        }
        Ok(())
    }

    /// Multipart text fields posted next to `file`.
    #[must_use]
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("category", self.category.trim().to_owned())];
        let assignee = self.assignee.trim();
        if !assignee.is_empty() {
            fields.push(("assignedTo", assignee.to_owned()));
        }
        fields
    }
}
