//! Grammar checks for raw environment values.
//!
//! These mirror the checks commonly applied to configuration strings:
//! plain decimal numbers, boolean tokens, IP addresses, fully qualified
//! domain names, email addresses and URLs.

use once_cell::sync::Lazy;
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use typenv_core::{
    IpVersion, FALSE_TOKENS, MAX_DOMAIN_LABEL_LENGTH, MAX_EMAIL_LENGTH, MAX_EMAIL_LOCAL_LENGTH,
    MAX_URL_LENGTH, TRUE_TOKENS, URL_PROTOCOLS,
};
use url::{Host, Url};

static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?([0-9]*\.)?[0-9]+$").expect("numeric pattern compiles"));

static EMAIL_LOCAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+(\.[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("email local part pattern compiles")
});

/// Plain decimal number: optional sign, optional fraction, no exponent
#[must_use]
pub fn is_numeric(value: &str) -> bool {
    NUMERIC.is_match(value)
}

/// Parse a plain decimal number, rejecting anything [`is_numeric`] rejects
///
/// Values beyond the `f64` range are rejected too: an infinite number has
/// no JSON representation and could not be cached.
#[must_use]
pub fn parse_number(value: &str) -> Option<f64> {
    if !is_numeric(value) {
        return None;
    }
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// `true`/`1` and `false`/`0`, case-insensitive
#[must_use]
pub fn parse_boolean(value: &str) -> Option<bool> {
    let lowered = value.to_lowercase();
    if TRUE_TOKENS.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_TOKENS.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// IP address of the given version
#[must_use]
pub fn is_ip(value: &str, version: IpVersion) -> bool {
    match version {
        IpVersion::V4 => value.parse::<Ipv4Addr>().is_ok(),
        IpVersion::V6 => is_ipv6(value),
        IpVersion::Any => value.parse::<Ipv4Addr>().is_ok() || is_ipv6(value),
    }
}

fn is_ipv6(value: &str) -> bool {
    // Scoped addresses carry a zone id after '%'
    let address = match value.split_once('%') {
        Some((address, zone)) => {
            if zone.is_empty() || !zone.chars().all(|c| c.is_ascii_alphanumeric()) {
                return false;
            }
            address
        }
        None => value,
    };
    address.parse::<Ipv6Addr>().is_ok()
}

/// Fully qualified domain name
///
/// With `require_tld` the name needs at least two labels and an
/// alphabetic (or punycode) top-level label. A trailing dot is rejected.
#[must_use]
pub fn is_fqdn(value: &str, require_tld: bool) -> bool {
    if value.is_empty() || value.ends_with('.') {
        return false;
    }

    let labels: Vec<&str> = value.split('.').collect();
    let Some(tld) = labels.last() else {
        return false;
    };

    if require_tld {
        if labels.len() < 2 {
            return false;
        }
        let punycode = tld.len() > 4
            && tld.get(..4).is_some_and(|prefix| prefix.eq_ignore_ascii_case("xn--"))
            && tld.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        let alphabetic = tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic);
        if !punycode && !alphabetic {
            return false;
        }
    }

    if tld.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    labels.iter().all(|label| is_domain_label(label))
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_DOMAIN_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}

/// Email address with a dot-atom local part and an FQDN domain
#[must_use]
pub fn is_email(value: &str, require_tld: bool) -> bool {
    if value.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > MAX_EMAIL_LOCAL_LENGTH {
        return false;
    }
    EMAIL_LOCAL.is_match(local) && is_fqdn(domain, require_tld)
}

/// URL with an http, https or ftp scheme and an IP or FQDN host
///
/// Without `require_protocol` a bare `host/path` is accepted as well.
#[must_use]
pub fn is_url(value: &str, require_tld: bool, require_protocol: bool) -> bool {
    if value.is_empty()
        || value.len() > MAX_URL_LENGTH
        || value.chars().any(char::is_whitespace)
        || value.starts_with("//")
        || value.to_ascii_lowercase().starts_with("mailto:")
    {
        return false;
    }

    let candidate = if value.contains("://") {
        value.to_string()
    } else if require_protocol {
        return false;
    } else {
        format!("http://{value}")
    };

    let Ok(url) = Url::parse(&candidate) else {
        return false;
    };
    if !URL_PROTOCOLS.contains(&url.scheme()) {
        return false;
    }

    match url.host() {
        Some(Host::Domain(domain)) => is_fqdn(domain, require_tld),
        // The parser expands shorthand forms like `1.2.3`, so insist on the literal
        Some(Host::Ipv4(address)) => candidate.contains(&address.to_string()),
        Some(Host::Ipv6(_)) => true,
        None => false,
    }
}
