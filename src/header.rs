//! The closed enumeration of well-known header names.
//!
//! The variant set and declaration order below are grounded in the
//! original parser's `enum http_headers` (`Host` first, `CDN-Loop`
//! last); adding a variant at the end is backward compatible, as the
//! order is part of this crate's public contract for callers that
//! index `Message::headers` directly.

/// A well-known HTTP header name, or [`HeaderId::Unknown`] for anything
/// outside the closed set below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HeaderId {
    /// `Host`
    Host,
    /// `Cache-Control`
    CacheControl,
    /// `Connection`
    Connection,
    /// `Accept`
    Accept,
    /// `Accept-Language`
    AcceptLanguage,
    /// `Accept-Encoding`
    AcceptEncoding,
    /// `User-Agent`
    UserAgent,
    /// `Referer`
    Referer,
    /// `X-Forwarded-For`
    XForwardedFor,
    /// `Origin`
    Origin,
    /// `Upgrade-Insecure-Requests`
    UpgradeInsecureRequests,
    /// `Pragma`
    Pragma,
    /// `Cookie`
    Cookie,
    /// `DNT`
    Dnt,
    /// `Sec-GPC`
    SecGpc,
    /// `From`
    From,
    /// `If-Modified-Since`
    IfModifiedSince,
    /// `X-Requested-With`
    XRequestedWith,
    /// `X-Forwarded-Host`
    XForwardedHost,
    /// `X-Forwarded-Proto`
    XForwardedProto,
    /// `X-CSRF-Token`
    XCsrfToken,
    /// `Save-Data`
    SaveData,
    /// `Range`
    Range,
    /// `Content-Length`
    ContentLength,
    /// `Content-Type`
    ContentType,
    /// `Vary`
    Vary,
    /// `Date`
    Date,
    /// `Server`
    Server,
    /// `Expires`
    Expires,
    /// `Content-Encoding`
    ContentEncoding,
    /// `Last-Modified`
    LastModified,
    /// `ETag`
    ETag,
    /// `Allow`
    Allow,
    /// `Content-Range`
    ContentRange,
    /// `Accept-Charset`
    AcceptCharset,
    /// `Access-Control-Allow-Credentials`
    AccessControlAllowCredentials,
    /// `Access-Control-Allow-Headers`
    AccessControlAllowHeaders,
    /// `Access-Control-Allow-Methods`
    AccessControlAllowMethods,
    /// `Access-Control-Allow-Origin`
    AccessControlAllowOrigin,
    /// `Access-Control-MaxAge`
    AccessControlMaxAge,
    /// `Access-Control-Method`
    AccessControlMethod,
    /// `Access-Control-Request-Headers`
    AccessControlRequestHeaders,
    /// `Access-Control-Request-Method`
    AccessControlRequestMethod,
    /// `Access-Control-Request-Methods`
    AccessControlRequestMethods,
    /// `Age`
    Age,
    /// `Authorization`
    Authorization,
    /// `Content-Base`
    ContentBase,
    /// `Content-Description`
    ContentDescription,
    /// `Content-Disposition`
    ContentDisposition,
    /// `Content-Language`
    ContentLanguage,
    /// `Content-Location`
    ContentLocation,
    /// `Content-MD5`
    ContentMd5,
    /// `Expect`
    Expect,
    /// `If-Match`
    IfMatch,
    /// `If-None-Match`
    IfNoneMatch,
    /// `If-Range`
    IfRange,
    /// `If-Unmodified-Since`
    IfUnmodifiedSince,
    /// `Keep-Alive`
    KeepAlive,
    /// `Link`
    Link,
    /// `Location`
    Location,
    /// `Max-Forwards`
    MaxForwards,
    /// `Proxy-Authenticate`
    ProxyAuthenticate,
    /// `Proxy-Authorization`
    ProxyAuthorization,
    /// `Proxy-Connection`
    ProxyConnection,
    /// `Public`
    Public,
    /// `Retry-After`
    RetryAfter,
    /// `TE`
    Te,
    /// `Trailer`
    Trailer,
    /// `Transfer-Encoding`
    TransferEncoding,
    /// `Upgrade`
    Upgrade,
    /// `Warning`
    Warning,
    /// `WWW-Authenticate`
    WwwAuthenticate,
    /// `Via`
    Via,
    /// `Strict-Transport-Security`
    StrictTransportSecurity,
    /// `X-Frame-Options`
    XFrameOptions,
    /// `X-Content-Type-Options`
    XContentTypeOptions,
    /// `Alt-Svc`
    AltSvc,
    /// `Referrer-Policy`
    ReferrerPolicy,
    /// `X-XSS-Protection`
    XXssProtection,
    /// `Accept-Ranges`
    AcceptRanges,
    /// `Set-Cookie`
    SetCookie,
    /// `Sec-CH-UA`
    SecChUa,
    /// `Sec-CH-UA-Mobile`
    SecChUaMobile,
    /// `Sec-CH-UA-Platform`
    SecChUaPlatform,
    /// `Sec-Fetch-Site`
    SecFetchSite,
    /// `Sec-Fetch-Mode`
    SecFetchMode,
    /// `Sec-Fetch-User`
    SecFetchUser,
    /// `Sec-Fetch-Dest`
    SecFetchDest,
    /// `CF-RAY`
    CfRay,
    /// `CF-Visitor`
    CfVisitor,
    /// `CF-Connecting-IP`
    CfConnectingIp,
    /// `CF-IPCountry`
    CfIpCountry,
    /// `CDN-Loop`
    CdnLoop,
    /// Not one of the well-known names above; look the value up in
    /// [`crate::Message::xheaders`] instead.
    Unknown,
}

/// Number of well-known header names in the closed enumeration
/// (excludes [`HeaderId::Unknown`]).
pub const HEADER_COUNT: usize = 93;

const NAMES: [&str; HEADER_COUNT] = [
    "Host",
    "Cache-Control",
    "Connection",
    "Accept",
    "Accept-Language",
    "Accept-Encoding",
    "User-Agent",
    "Referer",
    "X-Forwarded-For",
    "Origin",
    "Upgrade-Insecure-Requests",
    "Pragma",
    "Cookie",
    "DNT",
    "Sec-GPC",
    "From",
    "If-Modified-Since",
    "X-Requested-With",
    "X-Forwarded-Host",
    "X-Forwarded-Proto",
    "X-CSRF-Token",
    "Save-Data",
    "Range",
    "Content-Length",
    "Content-Type",
    "Vary",
    "Date",
    "Server",
    "Expires",
    "Content-Encoding",
    "Last-Modified",
    "ETag",
    "Allow",
    "Content-Range",
    "Accept-Charset",
    "Access-Control-Allow-Credentials",
    "Access-Control-Allow-Headers",
    "Access-Control-Allow-Methods",
    "Access-Control-Allow-Origin",
    "Access-Control-MaxAge",
    "Access-Control-Method",
    "Access-Control-Request-Headers",
    "Access-Control-Request-Method",
    "Access-Control-Request-Methods",
    "Age",
    "Authorization",
    "Content-Base",
    "Content-Description",
    "Content-Disposition",
    "Content-Language",
    "Content-Location",
    "Content-MD5",
    "Expect",
    "If-Match",
    "If-None-Match",
    "If-Range",
    "If-Unmodified-Since",
    "Keep-Alive",
    "Link",
    "Location",
    "Max-Forwards",
    "Proxy-Authenticate",
    "Proxy-Authorization",
    "Proxy-Connection",
    "Public",
    "Retry-After",
    "TE",
    "Trailer",
    "Transfer-Encoding",
    "Upgrade",
    "Warning",
    "WWW-Authenticate",
    "Via",
    "Strict-Transport-Security",
    "X-Frame-Options",
    "X-Content-Type-Options",
    "Alt-Svc",
    "Referrer-Policy",
    "X-XSS-Protection",
    "Accept-Ranges",
    "Set-Cookie",
    "Sec-CH-UA",
    "Sec-CH-UA-Mobile",
    "Sec-CH-UA-Platform",
    "Sec-Fetch-Site",
    "Sec-Fetch-Mode",
    "Sec-Fetch-User",
    "Sec-Fetch-Dest",
    "CF-RAY",
    "CF-Visitor",
    "CF-Connecting-IP",
    "CF-IPCountry",
    "CDN-Loop",
];

const IDS: [HeaderId; HEADER_COUNT] = [
    HeaderId::Host,
    HeaderId::CacheControl,
    HeaderId::Connection,
    HeaderId::Accept,
    HeaderId::AcceptLanguage,
    HeaderId::AcceptEncoding,
    HeaderId::UserAgent,
    HeaderId::Referer,
    HeaderId::XForwardedFor,
    HeaderId::Origin,
    HeaderId::UpgradeInsecureRequests,
    HeaderId::Pragma,
    HeaderId::Cookie,
    HeaderId::Dnt,
    HeaderId::SecGpc,
    HeaderId::From,
    HeaderId::IfModifiedSince,
    HeaderId::XRequestedWith,
    HeaderId::XForwardedHost,
    HeaderId::XForwardedProto,
    HeaderId::XCsrfToken,
    HeaderId::SaveData,
    HeaderId::Range,
    HeaderId::ContentLength,
    HeaderId::ContentType,
    HeaderId::Vary,
    HeaderId::Date,
    HeaderId::Server,
    HeaderId::Expires,
    HeaderId::ContentEncoding,
    HeaderId::LastModified,
    HeaderId::ETag,
    HeaderId::Allow,
    HeaderId::ContentRange,
    HeaderId::AcceptCharset,
    HeaderId::AccessControlAllowCredentials,
    HeaderId::AccessControlAllowHeaders,
    HeaderId::AccessControlAllowMethods,
    HeaderId::AccessControlAllowOrigin,
    HeaderId::AccessControlMaxAge,
    HeaderId::AccessControlMethod,
    HeaderId::AccessControlRequestHeaders,
    HeaderId::AccessControlRequestMethod,
    HeaderId::AccessControlRequestMethods,
    HeaderId::Age,
    HeaderId::Authorization,
    HeaderId::ContentBase,
    HeaderId::ContentDescription,
    HeaderId::ContentDisposition,
    HeaderId::ContentLanguage,
    HeaderId::ContentLocation,
    HeaderId::ContentMd5,
    HeaderId::Expect,
    HeaderId::IfMatch,
    HeaderId::IfNoneMatch,
    HeaderId::IfRange,
    HeaderId::IfUnmodifiedSince,
    HeaderId::KeepAlive,
    HeaderId::Link,
    HeaderId::Location,
    HeaderId::MaxForwards,
    HeaderId::ProxyAuthenticate,
    HeaderId::ProxyAuthorization,
    HeaderId::ProxyConnection,
    HeaderId::Public,
    HeaderId::RetryAfter,
    HeaderId::Te,
    HeaderId::Trailer,
    HeaderId::TransferEncoding,
    HeaderId::Upgrade,
    HeaderId::Warning,
    HeaderId::WwwAuthenticate,
    HeaderId::Via,
    HeaderId::StrictTransportSecurity,
    HeaderId::XFrameOptions,
    HeaderId::XContentTypeOptions,
    HeaderId::AltSvc,
    HeaderId::ReferrerPolicy,
    HeaderId::XXssProtection,
    HeaderId::AcceptRanges,
    HeaderId::SetCookie,
    HeaderId::SecChUa,
    HeaderId::SecChUaMobile,
    HeaderId::SecChUaPlatform,
    HeaderId::SecFetchSite,
    HeaderId::SecFetchMode,
    HeaderId::SecFetchUser,
    HeaderId::SecFetchDest,
    HeaderId::CfRay,
    HeaderId::CfVisitor,
    HeaderId::CfConnectingIp,
    HeaderId::CfIpCountry,
    HeaderId::CdnLoop,
];

impl HeaderId {
    /// The canonical header-name spelling for a well-known id.
    ///
    /// Returns `"x-header"` for [`HeaderId::Unknown`], since that id
    /// has no single canonical name - use the x-header's own name
    /// slice instead.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderId::Unknown => "x-header",
            other => {
                let idx = IDS.iter().position(|id| id == other).expect("id in table");
                NAMES[idx]
            }
        }
    }
}

/// Classify a header name by ASCII case-insensitive exact match
/// against the closed set of well-known names.
///
/// The repository this crate is modeled on ships a generated perfect
/// hash; this is the "reimplementers SHOULD use exact length-equal
/// comparison" form the spec calls for. A bug in the original's stub
/// fallback used *prefix* matching of a fixed length, which would
/// wrongly classify e.g. `"Cookie-Foo"` as `Cookie`. Matching here
/// requires the full candidate name to be the same length as `bytes`,
/// which rules that out.
pub fn classify_header_name(bytes: &[u8]) -> HeaderId {
    for (name, id) in NAMES.iter().zip(IDS.iter()) {
        if name.len() == bytes.len() && eq_ignore_ascii_case(name.as_bytes(), bytes) {
            return *id;
        }
    }
    HeaderId::Unknown
}

fn eq_ignore_ascii_case(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.eq_ignore_ascii_case(y))
}

/// True exactly for the well-known headers whose duplicates are
/// coalesced into the x-headers list rather than overwriting the
/// well-known slot.
///
/// `Set-Cookie` is deliberately *not* repeatable here: duplicate
/// `Set-Cookie` headers after the first land in x-headers too, which
/// lets callers recover all of them, matching the source parser's
/// observed behavior.
pub fn is_repeatable(id: HeaderId) -> bool {
    matches!(
        id,
        HeaderId::CacheControl
            | HeaderId::Accept
            | HeaderId::AcceptLanguage
            | HeaderId::AcceptEncoding
            | HeaderId::XForwardedFor
            | HeaderId::Pragma
            | HeaderId::Vary
            | HeaderId::ContentEncoding
            | HeaderId::Allow
            | HeaderId::AcceptCharset
            | HeaderId::AccessControlAllowHeaders
            | HeaderId::AccessControlAllowMethods
            | HeaderId::AccessControlRequestHeaders
            | HeaderId::AccessControlRequestMethods
            | HeaderId::ContentLanguage
            | HeaderId::Expect
            | HeaderId::IfMatch
            | HeaderId::IfNoneMatch
            | HeaderId::ProxyAuthenticate
            | HeaderId::Public
            | HeaderId::Te
            | HeaderId::Trailer
            | HeaderId::TransferEncoding
            | HeaderId::Upgrade
            | HeaderId::Warning
            | HeaderId::WwwAuthenticate
            | HeaderId::Via
    )
}
