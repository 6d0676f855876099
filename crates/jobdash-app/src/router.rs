//! Address-bar router
//!
//! Maps paths such as `runJob/abc123` or `listLogs/page/2` to typed
//! [`Route`]s. Patterns are registered in order and compiled to anchored
//! regular expressions; `:name` segments capture one path segment each. The
//! router also keeps the back/forward history of visited paths.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;

use jobdash_core::prelude::*;

/// Characters escaped when an id is written into a path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Path the application starts on unless configured otherwise
pub const DEFAULT_ROUTE: &str = "listLogs";

/// A resolved navigation target with its typed arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `listLogs`
    ListLogs,
    /// `listLogs/job/:id`
    ListLogsForJob { job_id: String },
    /// `listLogs/page/:page`
    ListLogsPage { page: u32 },
    /// `viewLog/:id`
    ViewLog { log_id: String },
    /// `listJobs`
    ListJobs,
    /// `runJob/:id`
    RunJob { job_id: String },
}

impl Route {
    /// Canonical address-bar path for this route
    pub fn path(&self) -> String {
        match self {
            Route::ListLogs => "listLogs".to_string(),
            Route::ListLogsForJob { job_id } => format!("listLogs/job/{}", encode(job_id)),
            Route::ListLogsPage { page } => format!("listLogs/page/{}", page),
            Route::ViewLog { log_id } => format!("viewLog/{}", encode(log_id)),
            Route::ListJobs => "listJobs".to_string(),
            Route::RunJob { job_id } => format!("runJob/{}", encode(job_id)),
        }
    }

    pub fn handler(&self) -> RouteHandler {
        match self {
            Route::ListLogs | Route::ListLogsForJob { .. } | Route::ListLogsPage { .. } => {
                RouteHandler::RenderListLogs
            }
            Route::ViewLog { .. } => RouteHandler::RenderViewLog,
            Route::ListJobs => RouteHandler::RenderListJobs,
            Route::RunJob { .. } => RouteHandler::RenderRunJob,
        }
    }

    /// Label shown in the header breadcrumb
    pub fn breadcrumb(&self) -> Option<&'static str> {
        match self {
            Route::ListLogs => Some("Logs"),
            Route::ViewLog { .. } => Some("viewLog"),
            Route::RunJob { .. } => Some("Run job"),
            _ => None,
        }
    }
}

/// Named handler a pattern is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteHandler {
    RenderListLogs,
    RenderViewLog,
    RenderListJobs,
    RenderRunJob,
}

impl RouteHandler {
    /// Build the route for captured `(name, value)` pairs in pattern order.
    ///
    /// Returns `None` when the captures don't fit the handler, including a
    /// `:page` value that is not an unsigned integer.
    fn bind(self, params: &[(&str, String)]) -> Option<Route> {
        match (self, params) {
            (RouteHandler::RenderListLogs, []) => Some(Route::ListLogs),
            (RouteHandler::RenderListLogs, [("id", job_id)]) => Some(Route::ListLogsForJob {
                job_id: job_id.clone(),
            }),
            (RouteHandler::RenderListLogs, [("page", page)]) => page
                .parse()
                .ok()
                .map(|page| Route::ListLogsPage { page }),
            (RouteHandler::RenderViewLog, [(_, log_id)]) => Some(Route::ViewLog {
                log_id: log_id.clone(),
            }),
            (RouteHandler::RenderListJobs, []) => Some(Route::ListJobs),
            (RouteHandler::RenderRunJob, [(_, job_id)]) => Some(Route::RunJob {
                job_id: job_id.clone(),
            }),
            _ => None,
        }
    }
}

/// Options for [`Router::navigate`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Resolve and return the route; when false only the address changes
    pub trigger: bool,
}

impl NavigateOptions {
    pub const TRIGGER: Self = Self { trigger: true };
    pub const SILENT: Self = Self { trigger: false };
}

#[derive(Debug, Clone)]
struct RouteEntry {
    pattern: String,
    regex: Regex,
    params: Vec<String>,
    handler: RouteHandler,
}

/// Pattern table plus navigation history
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<RouteEntry>,
    current: Option<String>,
    back: Vec<String>,
    forward: Vec<String>,
}

impl Router {
    /// Router without any patterns
    pub fn new() -> Self {
        Self::default()
    }

    /// Router with the dashboard's route table
    pub fn with_default_routes() -> Result<Self> {
        let mut router = Self::new();
        router.register("listLogs", RouteHandler::RenderListLogs)?;
        router.register("listLogs/job/:id", RouteHandler::RenderListLogs)?;
        router.register("listLogs/page/:page", RouteHandler::RenderListLogs)?;
        router.register("viewLog/:id", RouteHandler::RenderViewLog)?;
        router.register("listJobs", RouteHandler::RenderListJobs)?;
        router.register("runJob/:id", RouteHandler::RenderRunJob)?;
        Ok(router)
    }

    /// Add a pattern. Earlier registrations win when several match.
    pub fn register(&mut self, pattern: &str, handler: RouteHandler) -> Result<()> {
        let (regex, params) = compile(pattern)?;
        trace!("Registered route {} -> {:?}", pattern, handler);
        self.routes.push(RouteEntry {
            pattern: pattern.to_string(),
            regex,
            params,
            handler,
        });
        Ok(())
    }

    /// Registered patterns in matching order
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.pattern.as_str())
    }

    /// Resolve `path` against the table without touching history
    pub fn resolve(&self, path: &str) -> Option<Route> {
        let fragment = normalize(path);
        self.routes.iter().find_map(|entry| {
            let captures = entry.regex.captures(fragment)?;
            let mut params = Vec::with_capacity(entry.params.len());
            for (name, value) in entry.params.iter().zip(captures.iter().skip(1)) {
                let decoded = percent_decode_str(value?.as_str()).decode_utf8().ok()?;
                params.push((name.as_str(), decoded.into_owned()));
            }
            entry.handler.bind(&params)
        })
    }

    /// Go to `path`.
    ///
    /// With `trigger`, the path is recorded only if it resolves, and the
    /// route is returned for the caller to mount. Without it the address is
    /// recorded as-is and nothing is returned. Unmatched paths leave the
    /// router untouched.
    pub fn navigate(&mut self, path: &str, options: NavigateOptions) -> Option<Route> {
        let fragment = normalize(path).to_string();
        if !options.trigger {
            self.record(fragment);
            return None;
        }
        match self.resolve(&fragment) {
            Some(route) => {
                self.record(fragment);
                Some(route)
            }
            None => {
                debug!("No route matches {:?}", path);
                None
            }
        }
    }

    /// Step back in history, returning the route to re-mount
    pub fn back(&mut self) -> Option<Route> {
        let previous = self.back.pop()?;
        if let Some(current) = self.current.replace(previous) {
            self.forward.push(current);
        }
        self.current_route()
    }

    /// Step forward in history, returning the route to re-mount
    pub fn forward(&mut self) -> Option<Route> {
        let next = self.forward.pop()?;
        if let Some(current) = self.current.replace(next) {
            self.back.push(current);
        }
        self.current_route()
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Address currently shown
    pub fn current_path(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_route(&self) -> Option<Route> {
        self.current.as_deref().and_then(|path| self.resolve(path))
    }

    fn record(&mut self, fragment: String) {
        if self.current.as_deref() == Some(fragment.as_str()) {
            return;
        }
        if let Some(current) = self.current.replace(fragment) {
            self.back.push(current);
        }
        self.forward.clear();
    }
}

/// Strip a leading `#`/`/`, a trailing `/` and any query string
fn normalize(path: &str) -> &str {
    let path = path.trim();
    let path = path.split_once('?').map_or(path, |(p, _)| p);
    path.trim_start_matches(['#', '/']).trim_end_matches('/')
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

fn compile(pattern: &str) -> Result<(Regex, Vec<String>)> {
    let mut source = String::from("^");
    let mut params: Vec<String> = Vec::new();

    for (i, segment) in normalize(pattern).split('/').enumerate() {
        if i > 0 {
            source.push('/');
        }
        match segment.strip_prefix(':') {
            Some(name) => {
                if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
                {
                    return Err(Error::route_pattern(pattern, "invalid parameter name"));
                }
                if params.iter().any(|p| p == name) {
                    return Err(Error::route_pattern(
                        pattern,
                        format!("duplicate parameter :{}", name),
                    ));
                }
                params.push(name.to_string());
                source.push_str("([^/]+)");
            }
            None => source.push_str(&regex::escape(segment)),
        }
    }
    source.push('$');

    let regex = Regex::new(&source).map_err(|e| Error::route_pattern(pattern, e.to_string()))?;
    Ok((regex, params))
}
