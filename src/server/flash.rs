//! One-shot flash messages carried in a cookie across the redirect after a
//! mutation. The next rendered page reads the message and clears the cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar};

const FLASH_COOKIE: &str = "bandstand_flash";

/// Queue a message for the next rendered page.
pub fn set_flash(jar: CookieJar, message: &str) -> CookieJar {
    let encoded = urlencoding::encode(message).into_owned();
    jar.add(
        Cookie::build((FLASH_COOKIE, encoded))
            .path("/")
            .http_only(true)
            .build(),
    )
}

/// Read and clear the pending message, if any.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<String>) {
    let message = jar.get(FLASH_COOKIE).map(|cookie| {
        urlencoding::decode(cookie.value())
            .map(|decoded| decoded.into_owned())
            .unwrap_or_default()
    });
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/").build());
    (jar, message)
}
