/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::ApiParams;
use crate::v3::errors::ImgurError;
use std::str::FromStr;
use strum_macros::{Display, EnumString, IntoStaticStr, VariantNames};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum GallerySection {
    Hot,
    Top,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum GallerySort {
    Viral,
    Top,
    Time,
    Rising,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum Window {
    Day,
    Week,
    Month,
    Year,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
    Veto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum CommentSort {
    Best,
    Top,
    New,
}

/// Ordering of an account's own images and albums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    Newest,
    Oldest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum PrivacyLevel {
    Public,
    Hidden,
    Secret,
}

/// Parses a caller supplied choice, failing with [`ImgurError::Validation`] when the
/// value isn't one the API accepts.
///
/// ```rust
/// use imgur::v3::{parse_choice, Window};
///
/// assert_eq!(parse_choice::<Window>("window", "week").unwrap(), Window::Week);
/// assert!(parse_choice::<Window>("window", "fortnight").is_err());
/// ```
pub fn parse_choice<T>(name: &str, value: &str) -> Result<T, ImgurError>
where
    T: FromStr + strum::VariantNames,
{
    T::from_str(value).map_err(|_| {
        ImgurError::validation(format!(
            "{name} value \"{value}\" is wrong. Possible values are: {}",
            T::VARIANTS.join(", ")
        ))
    })
}

/// Fails with [`ImgurError::Validation`] if a required value is blank
pub(crate) fn require<'a>(name: &str, value: &'a str) -> Result<&'a str, ImgurError> {
    if value.trim().is_empty() {
        return Err(ImgurError::validation(format!("{name} is required")));
    }
    Ok(value)
}

/// Page selection passed straight through to the API.
///
/// Listing endpoints take the page number as a path segment, only `perPage` is sent
/// as a parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub per_page: Option<u32>,
}

impl Pager {
    pub fn new(page: u32) -> Self {
        Self {
            page,
            per_page: None,
        }
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub(crate) fn params(&self) -> ApiParams {
        ApiParams::new().opt_text("perPage", self.per_page.map(|p| p.to_string()))
    }
}
