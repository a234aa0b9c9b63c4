use actix_web::HttpRequest;

/// Best-effort client identity for rate limiting: first `x-forwarded-for`
/// entry, else `x-real-ip`, else a shared "unknown" bucket. Header-derived
/// and trivially spoofable; this keys a politeness limit, not a security
/// boundary.
pub fn client_ip(req: &HttpRequest) -> String {
    if let Some(forwarded) = req.headers().get("x-forwarded-for") {
        if let Ok(value) = forwarded.to_str() {
            let first = value.split(',').next().unwrap_or("").trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(real_ip) = req.headers().get("x-real-ip") {
        if let Ok(value) = real_ip.to_str() {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    "unknown".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn forwarded_for_takes_first_entry() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", "203.0.113.9, 10.0.0.1"))
            .insert_header(("x-real-ip", "198.51.100.2"))
            .to_http_request();
        assert_eq!(client_ip(&req), "203.0.113.9");
    }

    #[test]
    fn falls_back_to_real_ip() {
        let req = TestRequest::default()
            .insert_header(("x-real-ip", "198.51.100.2"))
            .to_http_request();
        assert_eq!(client_ip(&req), "198.51.100.2");
    }

    #[test]
    fn empty_forwarded_for_falls_through() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", " "))
            .insert_header(("x-real-ip", "198.51.100.2"))
            .to_http_request();
        assert_eq!(client_ip(&req), "198.51.100.2");
    }

    #[test]
    fn unidentified_clients_share_one_bucket() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(client_ip(&req), "unknown");
    }
}
