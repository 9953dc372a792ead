#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Trends,
    Budget,
    Goals,
    Education,
    Community,
    Alerts,
    Ai,
    Settings,
}

impl Route {
    /// Sidebar order.
    pub const ALL: [Route; 9] = [
        Route::Dashboard,
        Route::Trends,
        Route::Budget,
        Route::Goals,
        Route::Education,
        Route::Community,
        Route::Alerts,
        Route::Ai,
        Route::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Trends => "trends",
            Self::Budget => "budget",
            Self::Goals => "goals",
            Self::Education => "education",
            Self::Community => "community",
            Self::Alerts => "alerts",
            Self::Ai => "ai",
            Self::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Panel Principal",
            Self::Trends => "Análisis",
            Self::Budget => "Presupuesto",
            Self::Goals => "Metas",
            Self::Education => "Educación",
            Self::Community => "Comunidad",
            Self::Alerts => "Alertas",
            Self::Ai => "Asistente AI",
            Self::Settings => "Configuración",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Trends => "/trends",
            Self::Budget => "/budget",
            Self::Goals => "/goals",
            Self::Education => "/education",
            Self::Community => "/community",
            Self::Alerts => "/alerts",
            Self::Ai => "/ai",
            Self::Settings => "/settings",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }

    /// `#/goals`, `/goals/` and `goals` all resolve to the same page; anything
    /// unknown lands on the dashboard.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        Self::ALL
            .into_iter()
            .find(|r| r.path().trim_matches('/') == path)
            .unwrap_or(Route::Dashboard)
    }

    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|h| Self::from_hash(&h))
            .unwrap_or(Route::Dashboard)
    }
}

pub fn navigate(route: Route) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(route.path()) {
            log::warn!("could not navigate to {}: {:?}", route.id(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_round_trips_through_its_hash() {
        for route in Route::ALL {
            assert_eq!(Route::from_hash(&route.href()), route, "{}", route.id());
        }
    }

    #[test]
    fn loose_hashes_are_accepted() {
        assert_eq!(Route::from_hash("#/goals/"), Route::Goals);
        assert_eq!(Route::from_hash("ai"), Route::Ai);
        assert_eq!(Route::from_hash(""), Route::Dashboard);
        assert_eq!(Route::from_hash("#"), Route::Dashboard);
    }

    #[test]
    fn unknown_paths_fall_back_to_dashboard() {
        assert_eq!(Route::from_hash("#/connection"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/trends/2024"), Route::Dashboard);
    }
}
