//! Deployment base path for the router.
//!
//! `PUBLIC_URL` is read at compile time (e.g. `/kindworld` when hosted under a
//! subdirectory); without it routes are root-anchored.

/// Router base, or `None` to serve from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_base_trims_or_disappears() {
        assert_eq!(router_base_with_base("/kindworld/"), Some(String::from("/kindworld")));
        assert_eq!(router_base_with_base(" /kindworld "), Some(String::from("/kindworld")));
        assert_eq!(router_base_with_base("/"), None);
        assert_eq!(router_base_with_base(""), None);
    }
}
