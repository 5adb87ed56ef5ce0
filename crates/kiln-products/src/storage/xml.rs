//! Document technology: records render as XML elements

use super::{check_detail, check_main};
use kiln_core::{
    Backend, DetailRecord, DetailRecordDao, MainRecord, MainRecordDao, RecordRole, Result,
    SaveReceipt, StorageTechnology,
};

/// Document backend
pub const XML: Backend = Backend::new("xml");

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Document main-record DAO
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlMainRecordDao;

impl MainRecordDao for XmlMainRecordDao {
    fn backend(&self) -> Backend {
        XML
    }

    fn save(&self, record: &MainRecord) -> Result<SaveReceipt> {
        check_main(record)?;
        let rendered = format!(
            "<mainRecord id=\"{}\"><customer>{}</customer></mainRecord>",
            escape(&record.id),
            escape(&record.customer)
        );
        tracing::debug!(backend = %XML, id = %record.id, "saved main record");
        Ok(SaveReceipt {
            backend: XML,
            role: RecordRole::Main,
            rendered,
        })
    }
}

/// Document detail-record DAO
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlDetailRecordDao;

impl DetailRecordDao for XmlDetailRecordDao {
    fn backend(&self) -> Backend {
        XML
    }

    fn save(&self, record: &DetailRecord) -> Result<SaveReceipt> {
        check_detail(record)?;
        let rendered = format!(
            "<detailRecord mainId=\"{}\" line=\"{}\"><item>{}</item><quantity>{}</quantity></detailRecord>",
            escape(&record.main_id),
            record.line,
            escape(&record.item),
            record.quantity
        );
        tracing::debug!(
            backend = %XML,
            main_id = %record.main_id,
            line = record.line,
            "saved detail record"
        );
        Ok(SaveReceipt {
            backend: XML,
            role: RecordRole::Detail,
            rendered,
        })
    }
}

/// Document storage technology
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlTechnology;

impl StorageTechnology for XmlTechnology {
    const BACKEND: Backend = XML;
    type MainDao = XmlMainRecordDao;
    type DetailDao = XmlDetailRecordDao;

    fn main_dao() -> Self::MainDao {
        XmlMainRecordDao
    }

    fn detail_dao() -> Self::DetailDao {
        XmlDetailRecordDao
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use kiln_core::KilnError;

    #[test]
    fn test_main_record_rendering_escapes_markup() {
        let receipt = XmlMainRecordDao
            .save(&MainRecord::new("o-1", "Smith & <Sons>"))
            .unwrap();
        assert_eq!(receipt.backend, XML);
        assert_eq!(
            receipt.rendered,
            "<mainRecord id=\"o-1\"><customer>Smith &amp; &lt;Sons&gt;</customer></mainRecord>"
        );
    }

    #[test]
    fn test_detail_record_validation() {
        assert_matches!(
            XmlDetailRecordDao.save(&DetailRecord::new("o-1", 1, "nut", 0)),
            Err(KilnError::Rejected { capability: "detail-record-dao", .. })
        );
        assert_matches!(
            XmlMainRecordDao.save(&MainRecord::new("  ", "nobody")),
            Err(KilnError::Rejected { capability: "main-record-dao", .. })
        );
    }

    #[test]
    fn test_technology_roles_share_backend() {
        assert_eq!(XmlTechnology::main_dao().backend(), XmlTechnology::BACKEND);
        assert_eq!(XmlTechnology::detail_dao().backend(), XmlTechnology::BACKEND);
    }
}
