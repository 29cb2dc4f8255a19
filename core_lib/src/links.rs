//! Links into the WordPress site that owns accounts, checkout and lead intake

use url::Url;

const LEAD_PATH: &str = "/wp-json/sadopak/v1/lead";
const LOGIN_PATH: &str = "/wp-login.php";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPressLinks {
    base: Url,
}

/// The WordPress account screens a visitor can be sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Register,
    LostPassword,
    GoogleLogin,
}

impl AuthAction {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "login" => Some(AuthAction::Login),
            "register" => Some(AuthAction::Register),
            "lost-password" => Some(AuthAction::LostPassword),
            "google" => Some(AuthAction::GoogleLogin),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            AuthAction::Login => "login",
            AuthAction::Register => "register",
            AuthAction::LostPassword => "lost-password",
            AuthAction::GoogleLogin => "google",
        }
    }

    fn query(&self) -> Option<(&'static str, &'static str)> {
        match self {
            AuthAction::Login => None,
            AuthAction::Register => Some(("action", "register")),
            AuthAction::LostPassword => Some(("action", "lostpassword")),
            AuthAction::GoogleLogin => Some(("loginSocial", "google")),
        }
    }
}

impl WordPressLinks {
    pub fn new(base: &Url) -> Self {
        let mut base = base.clone();
        base.set_query(None);
        base.set_fragment(None);
        Self { base }
    }

    /// Appends `path` to whatever path prefix the base URL carries.
    fn url(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        let prefix = self.base.path().trim_end_matches('/');
        url.set_path(&format!("{}{}", prefix, path));
        url
    }

    pub fn lead_endpoint(&self) -> Url {
        self.url(LEAD_PATH)
    }

    pub fn checkout_url(&self, product_id: u32) -> Url {
        let mut url = self.url("/checkout/");
        url.query_pairs_mut()
            .append_pair("add-to-cart", &product_id.to_string());
        url
    }

    pub fn auth_url(&self, action: AuthAction, redirect_to: &str) -> Url {
        let mut url = self.url(LOGIN_PATH);
        {
            let mut query = url.query_pairs_mut();
            if let Some((key, value)) = action.query() {
                query.append_pair(key, value);
            }
            query.append_pair("redirect_to", redirect_to);
        }
        url
    }

    pub fn login_url(&self, redirect_to: &str) -> Url {
        self.auth_url(AuthAction::Login, redirect_to)
    }

    pub fn register_url(&self, redirect_to: &str) -> Url {
        self.auth_url(AuthAction::Register, redirect_to)
    }

    pub fn lost_password_url(&self, redirect_to: &str) -> Url {
        self.auth_url(AuthAction::LostPassword, redirect_to)
    }

    pub fn google_login_url(&self, redirect_to: &str) -> Url {
        self.auth_url(AuthAction::GoogleLogin, redirect_to)
    }

    pub fn my_account_url(&self) -> Url {
        self.url("/my-account/")
    }
}
