use rust_decimal::RoundingStrategy;
use thiserror::Error;
use wasm_bindgen::JsCast;

use crate::models::Transaction;
use crate::stats;

pub const REPORT_FILE_NAME: &str = "finanwise_reporte.csv";
const HEADER: [&str; 5] = ["fecha", "tipo", "categoria", "descripcion", "monto"];

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("could not write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("could not finish csv: {0}")]
    Flush(String),
    #[error("csv is not valid utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("could not start download: {0}")]
    Download(String),
}

/// One row per transaction, newest first. Amounts are plain decimals with two
/// places so spreadsheets read them as numbers.
pub fn transactions_csv(transactions: &[Transaction]) -> Result<String, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for tx in stats::recent(transactions, transactions.len()) {
        let amount = tx
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        writer.write_record([
            tx.date.format("%Y-%m-%d").to_string(),
            tx.kind.label().to_lowercase(),
            tx.category.clone(),
            tx.description.clone(),
            format!("{:.2}", amount),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Flush(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Hands the CSV to the browser as a file download.
pub fn download_csv(transactions: &[Transaction]) -> Result<(), ReportError> {
    let content = transactions_csv(transactions)?;
    let blob = gloo::file::Blob::new_with_options(content.as_str(), Some("text/csv;charset=utf-8"));
    let url = gloo::file::ObjectUrl::from(blob);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ReportError::Download("no document".to_string()))?;
    let anchor = document
        .create_element("a")
        .map_err(|e| ReportError::Download(format!("{:?}", e)))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ReportError::Download("not an anchor".to_string()))?;

    anchor.set_href(&url);
    anchor.set_download(REPORT_FILE_NAME);
    anchor.click();
    log::info!("exported {} transaction(s)", transactions.len());
    Ok(())
}
