//! # Routes
//!
//! Every screen is a [`Route`] variant carrying its parameters already typed.
//! Path strings such as `property_detail/3` only exist at the edge: they are
//! produced by `Display` and consumed by `FromStr` / [`RouteTemplate::bind`],
//! so screens never parse a route segment themselves.
//!
//! ```text
//! "property_detail/{propertyId}" ──bind("3")──▶ Route::PropertyDetail(Id(3))
//!                                ──bind("x")──▶ Route::PropertyDetail(Malformed("x"))
//!                                ──bind(None)─▶ Err(MissingParameter)
//! ```
//!
//! A malformed parameter is not a routing failure. The route is built and the
//! screen that consumes it falls through to its not-found view.

use std::fmt;
use std::str::FromStr;

use crate::core::property::PropertyId;

/// Property parameter as delivered to a screen: either a valid id or the raw
/// segment that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyRef {
    Id(PropertyId),
    Malformed(String),
}

impl PropertyRef {
    /// Coerce a raw route segment.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<PropertyId>() {
            Ok(id) => PropertyRef::Id(id),
            Err(_) => PropertyRef::Malformed(raw.to_string()),
        }
    }

    pub fn id(&self) -> Option<PropertyId> {
        match self {
            PropertyRef::Id(id) => Some(*id),
            PropertyRef::Malformed(_) => None,
        }
    }
}

impl From<PropertyId> for PropertyRef {
    fn from(id: PropertyId) -> Self {
        PropertyRef::Id(id)
    }
}

impl fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyRef::Id(id) => write!(f, "{id}"),
            PropertyRef::Malformed(raw) => f.write_str(raw),
        }
    }
}

/// Symbolic route patterns, one per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteTemplate {
    Home,
    Favorites,
    Profile,
    PropertyDetail,
    ContactAgent,
    Settings,
    EditProfile,
    Notifications,
}

impl RouteTemplate {
    pub const ALL: [RouteTemplate; 8] = [
        RouteTemplate::Home,
        RouteTemplate::Favorites,
        RouteTemplate::Profile,
        RouteTemplate::PropertyDetail,
        RouteTemplate::ContactAgent,
        RouteTemplate::Settings,
        RouteTemplate::EditProfile,
        RouteTemplate::Notifications,
    ];

    pub const PROPERTY_ID_PARAM: &'static str = "propertyId";

    pub fn pattern(self) -> &'static str {
        match self {
            RouteTemplate::Home => "home",
            RouteTemplate::Favorites => "favorites",
            RouteTemplate::Profile => "profile",
            RouteTemplate::PropertyDetail => "property_detail/{propertyId}",
            RouteTemplate::ContactAgent => "contact_agent/{propertyId}",
            RouteTemplate::Settings => "settings",
            RouteTemplate::EditProfile => "edit_profile",
            RouteTemplate::Notifications => "notifications",
        }
    }

    /// Name of the placeholder segment, for parameterized templates.
    pub fn param_name(self) -> Option<&'static str> {
        match self {
            RouteTemplate::PropertyDetail | RouteTemplate::ContactAgent => {
                Some(Self::PROPERTY_ID_PARAM)
            }
            _ => None,
        }
    }

    pub fn from_pattern(pattern: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.pattern() == pattern)
    }

    /// Leading static segment (`property_detail` for `property_detail/{propertyId}`).
    fn prefix(self) -> &'static str {
        let pattern = self.pattern();
        pattern.split_once('/').map_or(pattern, |(head, _)| head)
    }

    /// Substitute the placeholder and build the typed route.
    pub fn bind(self, param: Option<&str>) -> Result<Route, RouteError> {
        match (self.param_name(), param) {
            (Some(_), None) => Err(RouteError::MissingParameter {
                template: self.pattern(),
            }),
            (None, Some(value)) => Err(RouteError::UnexpectedParameter {
                template: self.pattern(),
                value: value.to_string(),
            }),
            (Some(_), Some(value)) => Ok(match self {
                RouteTemplate::ContactAgent => Route::ContactAgent(PropertyRef::parse(value)),
                _ => Route::PropertyDetail(PropertyRef::parse(value)),
            }),
            (None, None) => Ok(match self {
                RouteTemplate::Home => Route::Home,
                RouteTemplate::Favorites => Route::Favorites,
                RouteTemplate::Profile => Route::Profile,
                RouteTemplate::Settings => Route::Settings,
                RouteTemplate::EditProfile => Route::EditProfile,
                _ => Route::Notifications,
            }),
        }
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// A concrete destination with its parameters bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Favorites,
    Profile,
    PropertyDetail(PropertyRef),
    ContactAgent(PropertyRef),
    Settings,
    EditProfile,
    Notifications,
}

impl Route {
    pub fn property_detail(id: PropertyId) -> Self {
        Route::PropertyDetail(PropertyRef::Id(id))
    }

    pub fn contact_agent(id: PropertyId) -> Self {
        Route::ContactAgent(PropertyRef::Id(id))
    }

    pub fn template(&self) -> RouteTemplate {
        match self {
            Route::Home => RouteTemplate::Home,
            Route::Favorites => RouteTemplate::Favorites,
            Route::Profile => RouteTemplate::Profile,
            Route::PropertyDetail(_) => RouteTemplate::PropertyDetail,
            Route::ContactAgent(_) => RouteTemplate::ContactAgent,
            Route::Settings => RouteTemplate::Settings,
            Route::EditProfile => RouteTemplate::EditProfile,
            Route::Notifications => RouteTemplate::Notifications,
        }
    }

    /// The bound property parameter, if this route has one.
    pub fn property(&self) -> Option<&PropertyRef> {
        match self {
            Route::PropertyDetail(p) | Route::ContactAgent(p) => Some(p),
            _ => None,
        }
    }

    /// Concrete path string, e.g. `property_detail/3`.
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let template = self.template();
        match self.property() {
            Some(param) => write!(f, "{}/{}", template.prefix(), param),
            None => f.write_str(template.pattern()),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let (head, param) = match path.split_once('/') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let template = RouteTemplate::ALL
            .into_iter()
            .find(|t| t.prefix() == head)
            .ok_or_else(|| RouteError::UnknownRoute(path.to_string()))?;
        template.bind(param)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A parameterized template was navigated to without its value.
    MissingParameter { template: &'static str },
    /// A value was supplied for a template without a placeholder.
    UnexpectedParameter { template: &'static str, value: String },
    UnknownRoute(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::MissingParameter { template } => {
                write!(f, "route {template} requires a parameter")
            }
            RouteError::UnexpectedParameter { template, value } => {
                write!(f, "route {template} takes no parameter (got {value:?})")
            }
            RouteError::UnknownRoute(path) => write!(f, "unknown route: {path}"),
        }
    }
}

impl std::error::Error for RouteError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> PropertyId {
        PropertyId::new(raw).unwrap()
    }

    #[test]
    fn test_bind_substitutes_placeholder() {
        let route = RouteTemplate::PropertyDetail.bind(Some("3")).unwrap();
        assert_eq!(route, Route::property_detail(id(3)));
        assert_eq!(route.path(), "property_detail/3");
    }

    #[test]
    fn test_bind_malformed_is_not_an_error() {
        let route = RouteTemplate::PropertyDetail.bind(Some("abc")).unwrap();
        assert_eq!(
            route,
            Route::PropertyDetail(PropertyRef::Malformed("abc".to_string()))
        );
        assert_eq!(route.property().and_then(PropertyRef::id), None);
        assert_eq!(route.path(), "property_detail/abc");
    }

    #[test]
    fn test_bind_missing_parameter_rejected() {
        assert_eq!(
            RouteTemplate::PropertyDetail.bind(None),
            Err(RouteError::MissingParameter {
                template: "property_detail/{propertyId}"
            })
        );
        assert!(matches!(
            RouteTemplate::ContactAgent.bind(None),
            Err(RouteError::MissingParameter { .. })
        ));
    }

    #[test]
    fn test_bind_unexpected_parameter_rejected() {
        assert!(matches!(
            RouteTemplate::Home.bind(Some("1")),
            Err(RouteError::UnexpectedParameter { .. })
        ));
    }

    #[test]
    fn test_unparameterized_templates_bind_to_their_route() {
        for template in RouteTemplate::ALL {
            if template.param_name().is_some() {
                continue;
            }
            let route = template.bind(None).unwrap();
            assert_eq!(route.template(), template);
            assert_eq!(route.path(), template.pattern());
        }
    }

    #[test]
    fn test_parse_paths() {
        assert_eq!("home".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("favorites".parse::<Route>().unwrap(), Route::Favorites);
        assert_eq!(
            "contact_agent/4".parse::<Route>().unwrap(),
            Route::contact_agent(id(4))
        );
        assert_eq!(
            "property_detail/".parse::<Route>().unwrap(),
            Route::PropertyDetail(PropertyRef::Malformed(String::new()))
        );
        assert_eq!(
            "property_detail".parse::<Route>(),
            Err(RouteError::MissingParameter {
                template: "property_detail/{propertyId}"
            })
        );
        assert_eq!(
            "nowhere".parse::<Route>(),
            Err(RouteError::UnknownRoute("nowhere".to_string()))
        );
    }

    #[test]
    fn test_path_and_parse_agree() {
        let routes = [
            Route::Home,
            Route::Profile,
            Route::property_detail(id(2)),
            Route::contact_agent(id(1)),
            Route::Settings,
            Route::EditProfile,
            Route::Notifications,
        ];
        for route in routes {
            assert_eq!(route.path().parse::<Route>().unwrap(), route);
        }
    }

    #[test]
    fn test_template_lookup() {
        assert_eq!(
            RouteTemplate::from_pattern("property_detail/{propertyId}"),
            Some(RouteTemplate::PropertyDetail)
        );
        assert_eq!(RouteTemplate::from_pattern("property_detail/3"), None);
        assert_eq!(RouteTemplate::PropertyDetail.param_name(), Some("propertyId"));
        assert_eq!(RouteTemplate::Settings.param_name(), None);
    }
}
