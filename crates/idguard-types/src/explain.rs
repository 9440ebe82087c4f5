//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after template examples.
    pub examples: ExamplePair,
}

/// Before and after template examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Fence language for both fragments (`yaml`, `json`, `sh`, `text`).
    pub lang: &'static str,
    /// Template fragment that would trigger a finding.
    pub before: &'static str,
    /// Template fragment that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_TEMPLATE_LOGICAL_ID => Some(explain_logical_id()),
        ids::CHECK_TEMPLATE_PARSE => Some(explain_parse()),
        ids::CHECK_TOOL_RUNTIME => Some(explain_tool_runtime()),

        // Codes
        ids::CODE_LOGICAL_ID_SUFFIX_MISMATCH => Some(explain_suffix_mismatch()),
        ids::CODE_INVALID_RESOURCE_TYPE => Some(explain_invalid_resource_type()),
        ids::CODE_TEMPLATE_PARSE_ERROR => Some(explain_template_parse_error()),
        ids::CODE_TEMPLATE_READ_ERROR => Some(explain_template_read_error()),
        ids::CODE_RUNTIME_ERROR => Some(explain_tool_runtime()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_TEMPLATE_LOGICAL_ID,
        ids::CHECK_TEMPLATE_PARSE,
        ids::CHECK_TOOL_RUNTIME,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_LOGICAL_ID_SUFFIX_MISMATCH,
        ids::CODE_INVALID_RESOURCE_TYPE,
        ids::CODE_TEMPLATE_PARSE_ERROR,
        ids::CODE_TEMPLATE_READ_ERROR,
        ids::CODE_RUNTIME_ERROR,
    ]
}

// --- Check-level explanations ---

fn explain_logical_id() -> Explanation {
    Explanation {
        title: "Logical ID Naming",
        description: "\
Checks that every resource's logical ID ends with the last two segments of its
declared type, compared case-insensitively.

For `Type: AWS::S3::Bucket` the expected suffix is `S3Bucket`, so `LogsS3Bucket`
and `logss3bucket` pass while `LogsBucket` does not.

The first failing resource stops evaluation of its file. Logical IDs listed in
the exclusion file are skipped before their type is looked at.",
        remediation: "\
Rename the logical ID so it ends with the service and resource kind of its type,
and update every `Ref`/`GetAtt` that points at it. If the name cannot change
(for example, a resource already deployed with that logical ID), add it to the
exclusion list instead.",
        examples: ExamplePair {
            lang: "yaml",
            before: r#"Resources:
  Logs:
    Type: AWS::S3::Bucket"#,
            after: r#"Resources:
  LogsS3Bucket:
    Type: AWS::S3::Bucket"#,
        },
    }
}

fn explain_parse() -> Explanation {
    Explanation {
        title: "Template Parsing",
        description: "\
Reports template files that could not be read or decoded. `.json` files are
decoded as JSON; `.yaml` and `.yml` files as YAML. A file that does not decode
cannot be checked, so it fails the run.",
        remediation: "\
Fix the syntax error reported next to the file, or check the file's permissions.
Files that are not templates should live outside the scanned tree.",
        examples: ExamplePair {
            lang: "json",
            before: r#"{ "Resources": { "LogsS3Bucket": { "Type": "AWS::S3::Bucket" }, }"#,
            after: r#"{ "Resources": { "LogsS3Bucket": { "Type": "AWS::S3::Bucket" } } }"#,
        },
    }
}

fn explain_tool_runtime() -> Explanation {
    Explanation {
        title: "Tool Runtime Error",
        description: "\
idguard could not complete the run: the root directory is missing, the exclusion
file exists but cannot be read, or output could not be written. No verdict is
produced for any file.",
        remediation: "\
Check the path passed as the root directory and the `--exclusions` file. A
missing exclusion file is not an error; an unreadable one is.",
        examples: ExamplePair {
            lang: "sh",
            before: "idguard check ./does-not-exist",
            after: "idguard check ./stacks",
        },
    }
}

// --- Code-level explanations ---

fn explain_suffix_mismatch() -> Explanation {
    Explanation {
        title: "Logical ID Suffix Mismatch",
        description: "\
The logical ID does not end with the concatenation of the last two segments of
the resource type. `AWS::EC2::SecurityGroup` expects the suffix
`EC2SecurityGroup`; `AWS::Lambda::Function` expects `LambdaFunction`.",
        remediation: "\
Append the expected suffix to the logical ID, keeping any descriptive prefix:
`Web` becomes `WebEC2SecurityGroup`.",
        examples: ExamplePair {
            lang: "yaml",
            before: r#"Resources:
  WebSg:
    Type: AWS::EC2::SecurityGroup"#,
            after: r#"Resources:
  WebEC2SecurityGroup:
    Type: AWS::EC2::SecurityGroup"#,
        },
    }
}

fn explain_invalid_resource_type() -> Explanation {
    Explanation {
        title: "Missing or Invalid Resource Type",
        description: "\
The resource has no `Type`, its `Type` is not a string, or the type has no `::`
separator. Without at least two segments no expected suffix can be derived.",
        remediation: "\
Declare a fully qualified type such as `AWS::SNS::Topic` or
`Custom::CertificateValidator`.",
        examples: ExamplePair {
            lang: "yaml",
            before: r#"Resources:
  AlertsSNSTopic:
    Type: Topic"#,
            after: r#"Resources:
  AlertsSNSTopic:
    Type: AWS::SNS::Topic"#,
        },
    }
}

fn explain_template_parse_error() -> Explanation {
    Explanation {
        title: "Template Parse Error",
        description: "\
The file is not valid JSON or YAML for its extension, its top level is not a
mapping, or its `Resources` section is not a mapping.",
        remediation: "\
Fix the reported syntax error. `Resources` must map logical IDs to resource
declarations.",
        examples: ExamplePair {
            lang: "yaml",
            before: r#"Resources:
  - Type: AWS::S3::Bucket"#,
            after: r#"Resources:
  LogsS3Bucket:
    Type: AWS::S3::Bucket"#,
        },
    }
}

fn explain_template_read_error() -> Explanation {
    Explanation {
        title: "Template Read Error",
        description: "\
The file was discovered but could not be read (permissions, or content that is
not UTF-8). The rest of the run continues.",
        remediation: "\
Make the file readable by the user running idguard, or re-encode it as UTF-8.",
        examples: ExamplePair {
            lang: "text",
            before: "-rw------- root root stack.yaml",
            after: "-rw-r--r-- root root stack.yaml",
        },
    }
}
