//! Integration tests for the validation pipeline

#[cfg(test)]
mod tests {
    use crate::ValidationService;
    use gloss_domain::UploadedFile;

    fn txt_file(content: &str) -> UploadedFile {
        UploadedFile::new(
            "notes.txt",
            Some("text/plain".to_string()),
            content.as_bytes().to_vec(),
        )
    }

    #[test]
    fn test_full_text_flow() {
        let service = ValidationService::with_defaults();
        let file = txt_file(r#"prose BEGIN_KNOWLEDGE {"a":1} END_KNOWLEDGE more prose"#);

        let report = service.validate_document(&file).unwrap();

        assert_eq!(report.file_type, "text/plain");
        assert_eq!(report.blocks_found, 1);
        assert_eq!(report.valid_blocks, 1);
        assert_eq!(report.invalid_blocks, 0);
        assert_eq!(report.results[0].block_number, 1);
        assert!(report.results[0].valid);
        assert_eq!(report.results[0].content, r#"{"a":1}"#);
        assert!(report.results[0].error.is_none());
    }

    #[test]
    fn test_ordinals_count_up_from_one() {
        let service = ValidationService::with_defaults();
        let text = (1..=4)
            .map(|i| format!(r#"BEGIN_KNOWLEDGE {{"n": {i}}} END_KNOWLEDGE"#))
            .collect::<Vec<_>>()
            .join(" filler ");

        let report = service.validate_document(&txt_file(&text)).unwrap();

        assert_eq!(report.blocks_found, 4);
        let ordinals: Vec<usize> = report.results.iter().map(|r| r.block_number).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4]);
        assert_eq!(report.results[2].content, r#"{"n": 3}"#);
    }

    #[test]
    fn test_unparseable_candidate_vanishes_from_the_report() {
        let service = ValidationService::with_defaults();
        let file = txt_file(r#"BEGIN_KNOWLEDGE {"a": 1,} END_KNOWLEDGE"#);

        let report = service.validate_document(&file).unwrap();

        // Dropped at scanning, so it is absent rather than invalid.
        assert_eq!(report.blocks_found, 0);
        assert_eq!(report.invalid_blocks, 0);
        assert!(report.results.is_empty());
    }

    #[test]
    fn test_dropped_candidate_does_not_disturb_ordinals() {
        let service = ValidationService::with_defaults();
        let file = txt_file(concat!(
            r#"BEGIN_KNOWLEDGE {"first": 1} END_KNOWLEDGE "#,
            r#"BEGIN_KNOWLEDGE {"bad": } END_KNOWLEDGE "#,
            r#"BEGIN_KNOWLEDGE {"third": 3} END_KNOWLEDGE"#,
        ));

        let report = service.validate_document(&file).unwrap();

        assert_eq!(report.blocks_found, 2);
        assert_eq!(report.results[0].block_number, 1);
        assert_eq!(report.results[0].content, r#"{"first": 1}"#);
        assert_eq!(report.results[1].block_number, 2);
        assert_eq!(report.results[1].content, r#"{"third": 3}"#);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let service = ValidationService::with_defaults();
        let file = txt_file(concat!(
            r#"BEGIN_KNOWLEDGE {"x": {"y": 2}} END_KNOWLEDGE "#,
            r#"BEGIN_KNOWLEDGE {"bad": } END_KNOWLEDGE"#,
        ));

        let first = service.validate_document(&file).unwrap();
        let second = service.validate_document(&file).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_counts_always_reconcile() {
        let service = ValidationService::with_defaults();
        let inputs = [
            "no blocks",
            r#"BEGIN_KNOWLEDGE {"a":1} END_KNOWLEDGE"#,
            r#"BEGIN_KNOWLEDGE {"a":1} END_KNOWLEDGE BEGIN_KNOWLEDGE {bad} END_KNOWLEDGE"#,
            r#"BEGIN_KNOWLEDGE {"a": {"b": {"c": 1}}} END_KNOWLEDGE"#,
        ];

        for input in inputs {
            let report = service.validate_document(&txt_file(input)).unwrap();
            assert_eq!(
                report.blocks_found,
                report.valid_blocks + report.invalid_blocks
            );
            assert_eq!(report.blocks_found, report.results.len());
        }
    }

    #[test]
    fn test_json_file_flow() {
        let service = ValidationService::with_defaults();

        // Markers live inside a JSON string value; the scanner sees the
        // raw file text, not the parsed value.
        let content = r#"{"note": "BEGIN_KNOWLEDGE {} END_KNOWLEDGE"}"#;
        let file = UploadedFile::new(
            "data.json",
            Some("application/json".to_string()),
            content.as_bytes().to_vec(),
        );

        let report = service.validate_document(&file).unwrap();
        assert_eq!(report.file_type, "application/json");
        assert_eq!(report.blocks_found, 1);
        assert_eq!(report.results[0].content, "{}");
    }

    #[test]
    fn test_docx_file_flow() {
        use docx_rs::{Docx, Paragraph, Run};
        use std::io::Cursor;

        let mut docx = Docx::new();
        for line in [
            "Meeting notes from the team",
            r#"BEGIN_KNOWLEDGE {"decision": "ship"} END_KNOWLEDGE"#,
            "closing remarks",
        ] {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
        }
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();

        let service = ValidationService::with_defaults();
        let file = UploadedFile::new("minutes.docx", None, cursor.into_inner());

        let report = service.validate_document(&file).unwrap();
        assert_eq!(report.blocks_found, 1);
        assert_eq!(report.results[0].content, r#"{"decision": "ship"}"#);
        assert_eq!(report.file_type, "application/octet-stream");
    }

    #[test]
    fn test_unsupported_upload_is_rejected_up_front() {
        let service = ValidationService::with_defaults();
        let file = UploadedFile::new("photo.png", Some("image/png".to_string()), vec![1, 2, 3]);

        let result = service.validate_document(&file);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_document_fails_without_a_report() {
        let service = ValidationService::with_defaults();
        let file = UploadedFile::new("broken.docx", None, b"garbage bytes".to_vec());

        let result = service.validate_document(&file);
        assert!(result.is_err());
    }
}
