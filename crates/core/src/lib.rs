// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jf-core: issue normalization engine for jflat
//!
//! Turns raw issue-tracker API records (deeply nested, optional-heavy,
//! inconsistently typed) into flat records with stable field names,
//! resolved references, derived time metrics and classified links.
//!
//! The engine is stateless: configuration is passed into every call and no
//! wall-clock time is read.

pub mod config;
pub mod error;
pub mod extract;
pub mod issue;
pub mod normalize;

pub use config::{FieldIds, NormalizeConfig};
pub use error::{Error, Result};
pub use issue::{
    ErrorRecord, IssueRef, LoggedTime, Normalized, NormalizedIssue, StatusDuration, WorkDuration,
    INVALID_JSON,
};
pub use normalize::{
    normalize, normalize_batch, normalize_issue, normalize_str, normalize_value, Input,
};
