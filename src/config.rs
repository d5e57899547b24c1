#[cfg(debug_assertions)]
pub fn contact_endpoint() -> &'static str {
    "http://localhost:3001/api/contact" // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn contact_endpoint() -> &'static str {
    "https://formspree.io/f/your-id" // Production form endpoint
}
