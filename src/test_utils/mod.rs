#![allow(missing_docs)]

pub(crate) mod fake_api;
pub(crate) mod html;

pub(crate) use fake_api::{FakeApi, budget_fixture, report_fixture, transaction_fixture};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment};
