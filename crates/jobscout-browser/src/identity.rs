use jobscout_core::{BrowserConfig, DEFAULT_USER_AGENT};
use rand::seq::SliceRandom;

const DESKTOP_AGENTS: [&str; 3] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
];

const DESKTOP_VIEWPORTS: [(u32, u32); 4] = [(1920, 1080), (1366, 768), (1536, 864), (1440, 900)];

/// User agent and window size the browser launches with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserIdentity {
    pub user_agent: String,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl BrowserIdentity {
    /// Identity for `config`: the configured window with the default agent,
    /// or a random desktop profile when `randomize_identity` is set.
    pub fn from_config(config: &BrowserConfig) -> Self {
        if config.randomize_identity {
            return Self::random_desktop();
        }

        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            viewport_width: config.window_width,
            viewport_height: config.window_height,
        }
    }

    /// One of a few common desktop agent and viewport combinations.
    pub fn random_desktop() -> Self {
        let mut rng = rand::thread_rng();
        let agent = DESKTOP_AGENTS.choose(&mut rng).copied().unwrap_or(DEFAULT_USER_AGENT);
        let (width, height) = DESKTOP_VIEWPORTS
            .choose(&mut rng)
            .copied()
            .unwrap_or((1920, 1080));

        Self {
            user_agent: agent.to_string(),
            viewport_width: width,
            viewport_height: height,
        }
    }
}
