pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // An absolute backend URL can be baked in at build time. Without it we
        // fall back to relative URLs, which work both in development (Trunk
        // proxies backend requests) and in production (nginx does).
        match option_env!("API_BASE_URL") {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => String::new(),
        }
    }
}
