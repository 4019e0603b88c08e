use serde::de::DeserializeOwned;

use super::ContentError;
use crate::model::{CareerEntry, Listing, Project, Skill, Testimonial};

/// A record type served by one of the `{data, length}` list endpoints.
pub trait ListResource: DeserializeOwned {
    /// Endpoint name used in errors and logs.
    const NAME: &'static str;
}

impl ListResource for CareerEntry {
    const NAME: &'static str = "careers";
}

impl ListResource for Skill {
    const NAME: &'static str = "skills";
}

impl ListResource for Project {
    const NAME: &'static str = "projects";
}

impl ListResource for Testimonial {
    const NAME: &'static str = "testimonials";
}

/// Parse a list endpoint response. When the reported `length` disagrees
/// with the number of records, the records win.
pub fn parse_listing<T: ListResource>(data: &[u8]) -> Result<Vec<T>, ContentError> {
    let listing: Listing<T> =
        serde_json::from_slice(data).map_err(|source| ContentError::Listing {
            resource: T::NAME,
            source,
        })?;
    check_length(T::NAME, &listing);
    Ok(listing.data)
}

pub(super) fn listing_from_value<T: ListResource>(
    value: serde_json::Value,
) -> Result<Vec<T>, ContentError> {
    let listing: Listing<T> =
        serde_json::from_value(value).map_err(|source| ContentError::Listing {
            resource: T::NAME,
            source,
        })?;
    check_length(T::NAME, &listing);
    Ok(listing.data)
}

fn check_length<T>(resource: &str, listing: &Listing<T>) {
    if let Some(length) = listing.length
        && length != listing.data.len()
    {
        tracing::warn!(
            resource,
            reported = length,
            actual = listing.data.len(),
            "listing length mismatch"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_envelope() {
        let careers = parse_listing::<CareerEntry>(
            br#"{"data":[{"started_at":"2024-08-04","title":"Software Engineer"}],"length":1}"#,
        )
        .unwrap_or_default();
        assert_eq!(careers.len(), 1);
        assert_eq!(careers[0].title, "Software Engineer");
    }

    #[test]
    fn data_wins_over_length() {
        let skills =
            parse_listing::<Skill>(br#"{"data":[{"name":"Go"},{"name":"Rust"}],"length":7}"#)
                .unwrap_or_default();
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn errors_name_the_resource() {
        let err = parse_listing::<Project>(br#"{"items":[]}"#);
        match err {
            Err(ContentError::Listing { resource, .. }) => assert_eq!(resource, "projects"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
