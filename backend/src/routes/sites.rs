//! Site lookup routes.

pub const LIST_SITES: &str = "ListSites";
pub const LIST_SITES_PATH: &str = "/sites";
pub const GET_SITE_PATH: &str = "/sites/{site_id}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const_values() {
        assert_eq!(LIST_SITES, "ListSites");
        assert_eq!(LIST_SITES_PATH, "/sites");
        assert!(GET_SITE_PATH.starts_with(LIST_SITES_PATH));
    }
}
