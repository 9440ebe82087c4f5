//! The `check` use case: load exclusions, walk the root, validate every template.

use camino::Utf8Path;
use idguard_domain::{ExclusionSet, TemplateOutcome};
use idguard_repo::TemplateError;
use idguard_settings::ResolvedSettings;
use idguard_types::{
    ExclusionSummary, FileRecord, FileStatus, Finding, IdguardReport, Location, RepoPath,
    RunCounts, SCHEMA_REPORT_V1, Severity, TemplateFormat, ToolMeta, Verdict, ids,
};
use serde_json::json;
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput {
    /// Resolved root, exclusion file and skip fragments.
    pub settings: ResolvedSettings,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: IdguardReport,
}

/// Run the check use case: load exclusions, discover templates, evaluate each, produce report.
///
/// Per-file problems (syntax errors, unreadable files) end up in the report.
/// Only run-level failures are returned as errors: a missing root directory
/// or an exclusion file that exists but cannot be read.
pub fn run_check(input: CheckInput) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();
    let settings = &input.settings;

    let exclusions = idguard_repo::load_exclusion_list(&settings.exclusion_file)?;
    let discovery = idguard_repo::discover_templates(&settings.root, &settings.skip_fragments)?;

    let mut files = Vec::with_capacity(discovery.skipped.len() + discovery.templates.len());
    for skipped in discovery.skipped {
        files.push(FileRecord {
            path: skipped.path,
            format: None,
            status: FileStatus::Skipped,
            excluded_resources: Vec::new(),
            finding: None,
        });
    }
    for path in &discovery.templates {
        files.push(validate_file(&settings.root, path, &exclusions.set));
    }

    let counts = RunCounts::from_files(&files);
    let verdict = if files.iter().any(|f| f.status.is_failure()) {
        Verdict::Fail
    } else {
        Verdict::Pass
    };
    tracing::info!(
        checked = counts.checked,
        non_compliant = counts.non_compliant,
        parse_errors = counts.parse_errors,
        read_errors = counts.read_errors,
        skipped = counts.skipped,
        "check finished"
    );

    let finished_at = OffsetDateTime::now_utc();
    let duration_ms = (finished_at - started_at).whole_milliseconds().max(0) as u64;

    let report = IdguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "idguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        duration_ms,
        verdict,
        counts,
        exclusions: ExclusionSummary {
            path: settings.exclusion_file.to_string(),
            found: exclusions.found,
            entries: exclusions.set.len() as u32,
        },
        files,
        errors: Vec::new(),
    };

    Ok(CheckOutput { report })
}

/// Read, parse and evaluate one discovered template.
pub fn validate_file(root: &Utf8Path, path: &RepoPath, exclusions: &ExclusionSet) -> FileRecord {
    let format = TemplateFormat::from_file_name(path.file_name());

    let (status, excluded_resources, finding) = match idguard_repo::read_template(root, path) {
        Ok(template) => {
            let eval = idguard_domain::evaluate(&template, exclusions);
            match eval.outcome {
                TemplateOutcome::Compliant => (FileStatus::Compliant, eval.excluded, None),
                TemplateOutcome::NonCompliant(violation) => (
                    FileStatus::NonCompliant,
                    eval.excluded,
                    Some(violation.to_finding(path)),
                ),
            }
        }
        Err(err) => {
            let status = if err.is_parse_error() {
                FileStatus::ParseError
            } else {
                FileStatus::ReadError
            };
            (status, Vec::new(), Some(template_error_finding(path, format, &err)))
        }
    };

    tracing::debug!(path = %path, status = ?status, "validated template");

    FileRecord {
        path: path.clone(),
        format: Some(format),
        status,
        excluded_resources,
        finding,
    }
}

fn template_error_finding(path: &RepoPath, format: TemplateFormat, err: &TemplateError) -> Finding {
    let (code, message, help) = if err.is_parse_error() {
        (
            ids::CODE_TEMPLATE_PARSE_ERROR,
            format!("Failed to parse {} file: {path}: {err}", format.label()),
            "Fix the syntax error; `Resources` must map logical IDs to declarations.",
        )
    } else {
        (
            ids::CODE_TEMPLATE_READ_ERROR,
            format!("Failed to read {path}: {err}"),
            "Make the file readable and UTF-8 encoded.",
        )
    };

    Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_TEMPLATE_PARSE.to_string(),
        code: code.to_string(),
        message,
        location: Some(Location {
            path: path.clone(),
            line: None,
            col: None,
        }),
        help: Some(help.to_string()),
        url: None,
        fingerprint: None,
        data: json!({ "error": err.to_string() }),
    }
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use idguard_settings::{Overrides, resolve_settings};
    use tempfile::TempDir;

    struct Fixture {
        _tmp: TempDir,
        root: Utf8PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let tmp = tempfile::tempdir().expect("create temp dir");
            let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
            Fixture { _tmp: tmp, root }
        }

        fn write(&self, rel: &str, contents: &str) -> &Self {
            let path = self.root.join(rel);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("create parent");
            }
            std::fs::write(path, contents).expect("write file");
            self
        }

        fn check(&self, exclusion_file: &str) -> IdguardReport {
            let settings = resolve_settings(Overrides {
                root: Some(self.root.join("repo")),
                exclusion_file: Some(self.root.join(exclusion_file)),
            });
            run_check(CheckInput { settings }).expect("run_check").report
        }
    }

    fn statuses(report: &IdguardReport) -> Vec<(&str, FileStatus)> {
        report
            .files
            .iter()
            .map(|f| (f.path.as_str(), f.status))
            .collect()
    }

    #[test]
    fn compliant_tree_passes() {
        let fx = Fixture::new();
        fx.write(
            "repo/net.json",
            r#"{"Resources": {"MainEC2VPC": {"Type": "AWS::EC2::VPC"}}}"#,
        )
        .write(
            "repo/app.yaml",
            "Resources:\n  LogsS3Bucket:\n    Type: AWS::S3::Bucket\n",
        );

        let report = fx.check("exclusion_list.txt");
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(
            statuses(&report),
            vec![
                ("app.yaml", FileStatus::Compliant),
                ("net.json", FileStatus::Compliant)
            ]
        );
        assert!(!report.exclusions.found);
        assert_eq!(verdict_exit_code(report.verdict), 0);
    }

    #[test]
    fn one_bad_file_does_not_stop_the_run() {
        let fx = Fixture::new();
        fx.write("repo/a.json", "{ not json")
            .write("repo/b.yaml", "Resources:\n  Handler:\n    Type: CustomResource\n")
            .write("repo/c.yml", "Resources:\n  AlertsSNSTopic:\n    Type: AWS::SNS::Topic\n")
            .write("repo/prod.manifest.json", "{ also not json");

        let report = fx.check("exclusion_list.txt");
        assert_eq!(
            statuses(&report),
            vec![
                ("prod.manifest.json", FileStatus::Skipped),
                ("a.json", FileStatus::ParseError),
                ("b.yaml", FileStatus::NonCompliant),
                ("c.yml", FileStatus::Compliant),
            ]
        );
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(verdict_exit_code(report.verdict), 2);
        assert_eq!(report.counts.checked, 3);
        assert_eq!(report.counts.skipped, 1);

        let parse = report.files[1].finding.as_ref().expect("parse finding");
        assert_eq!(parse.check_id, ids::CHECK_TEMPLATE_PARSE);
        assert_eq!(parse.code, ids::CODE_TEMPLATE_PARSE_ERROR);
        assert!(parse.message.starts_with("Failed to parse JSON file: a.json: "));
        assert!(parse.fingerprint.is_none());
    }

    #[test]
    fn exclusions_are_global_and_reported_per_file() {
        let fx = Fixture::new();
        fx.write("skip.txt", "LegacyQueue\n\x1b[33mOldBucket\x1b[0m\n")
            .write(
                "repo/one.yaml",
                "Resources:\n  LegacyQueue:\n    Type: AWS::SQS::Queue\n",
            )
            .write(
                "repo/two.yaml",
                "Resources:\n  OldBucket:\n    Type: Bucket\n  LogsS3Bucket:\n    Type: AWS::S3::Bucket\n",
            );

        let report = fx.check("skip.txt");
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.exclusions.found);
        assert_eq!(report.exclusions.entries, 2);
        assert_eq!(report.files[0].excluded_resources, vec!["LegacyQueue"]);
        assert_eq!(report.files[1].excluded_resources, vec!["OldBucket"]);
    }

    #[test]
    fn missing_root_is_a_run_error() {
        let fx = Fixture::new();
        let settings = resolve_settings(Overrides {
            root: Some(fx.root.join("nope")),
            exclusion_file: None,
        });
        let err = run_check(CheckInput { settings }).unwrap_err();
        assert!(format!("{err:#}").contains("root directory does not exist"));
    }

    #[test]
    fn unreadable_exclusion_file_is_a_run_error() {
        let fx = Fixture::new();
        fx.write("repo/a.yaml", "");
        let settings = resolve_settings(Overrides {
            root: Some(fx.root.join("repo")),
            exclusion_file: Some(fx.root.join("repo")),
        });
        let err = run_check(CheckInput { settings }).unwrap_err();
        assert!(format!("{err:#}").contains("read exclusion file"));
    }

    #[test]
    fn non_utf8_template_is_a_read_error() {
        let fx = Fixture::new();
        fx.write("repo/a.yaml", "");
        std::fs::write(fx.root.join("repo/b.yaml"), [0xFF, 0xFE, 0x00]).expect("write");

        let report = fx.check("exclusion_list.txt");
        assert_eq!(
            statuses(&report),
            vec![
                ("a.yaml", FileStatus::Compliant),
                ("b.yaml", FileStatus::ReadError)
            ]
        );
        let finding = report.files[1].finding.as_ref().expect("read finding");
        assert_eq!(finding.code, ids::CODE_TEMPLATE_READ_ERROR);
        assert!(finding.message.starts_with("Failed to read b.yaml: "));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_template_is_checked() {
        let fx = Fixture::new();
        fx.write(
            "shared/bucket.yaml",
            "Resources:\n  MyBucket:\n    Type: AWS::S3::Bucket\n",
        )
        .write("repo/own.yaml", "");
        std::os::unix::fs::symlink(
            fx.root.join("shared/bucket.yaml"),
            fx.root.join("repo/linked.yaml"),
        )
        .expect("symlink");

        let report = fx.check("exclusion_list.txt");
        assert_eq!(
            statuses(&report),
            vec![
                ("linked.yaml", FileStatus::NonCompliant),
                ("own.yaml", FileStatus::Compliant)
            ]
        );
        assert_eq!(report.verdict, Verdict::Fail);
    }

    #[test]
    fn merged_yaml_type_is_evaluated() {
        let fx = Fixture::new();
        fx.write(
            "repo/b.yaml",
            "Base: &b\n  Type: AWS::S3::Bucket\nResources:\n  LogsS3Bucket:\n    <<: *b\n",
        );

        let report = fx.check("exclusion_list.txt");
        assert_eq!(statuses(&report), vec![("b.yaml", FileStatus::Compliant)]);
        assert_eq!(report.verdict, Verdict::Pass);
    }

    #[test]
    fn bare_json_name_is_parsed_as_json() {
        let fx = Fixture::new();
        fx.write("repo/.json", "Resources: {}\n");

        let report = fx.check("exclusion_list.txt");
        assert_eq!(statuses(&report), vec![(".json", FileStatus::ParseError)]);
        assert_eq!(report.files[0].format, Some(TemplateFormat::Json));
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
