//! Command execution against the demo site.
//!
//! Commands:
//! - `resolve <path> [--call]` - Walk a path and show every crumb
//! - `trace <path>` - List what the handler at path could dispatch to
//! - `routes` - List every route discoverable from the site root

use std::collections::VecDeque;
use std::path::Path as FsPath;

use serde::Serialize;
use tracing::debug;

use objdispatch_core::{Crumb, DispatchConfig, Lookup, Node, Options, Resolver, Segments, Value};

use crate::error::{Error, Result};
use crate::site;

/// How deep `routes` follows nested classes.
pub const MAX_ROUTE_DEPTH: usize = 8;

/// Build the dispatcher configuration.
///
/// Layers, lowest first: defaults, the JSON file, the environment, then the
/// `--no-protect` flag.
pub fn load_config(file: Option<&FsPath>, no_protect: bool) -> Result<DispatchConfig> {
    let config = match file {
        Some(path) => DispatchConfig::load(path)?,
        None => DispatchConfig::default(),
    };
    let mut config = config.with_env()?;
    if no_protect {
        config.protect = false;
    }
    debug!(config = ?config, "Loaded dispatcher configuration.");
    Ok(config)
}

/// The outcome of `resolve`.
#[derive(Debug, Serialize)]
pub struct Resolution {
    pub crumbs: Vec<Crumb>,
    pub remaining: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl Resolution {
    pub fn terminal(&self) -> Option<&Crumb> {
        self.crumbs.last()
    }
}

/// Walk `path` from the site root.
///
/// With `call`, the terminal endpoint is invoked with the unconsumed
/// segments as arguments. Ending anywhere but an endpoint is then an error.
pub fn resolve(resolver: &Resolver, path: &str, call: bool) -> Result<Resolution> {
    let mut dispatch = resolver.resolve(None, site::root(), path);
    let crumbs: Vec<Crumb> = dispatch.by_ref().collect();
    let remaining = dispatch.into_remaining().to_vec();

    let mut resolution = Resolution {
        crumbs,
        remaining,
        result: None,
    };

    if call {
        let terminal = resolution
            .terminal()
            .filter(|crumb| crumb.endpoint)
            .ok_or_else(|| Error::NotFound {
                path: path.to_string(),
            })?;

        let result = match terminal.handler.as_value() {
            Some(value) if resolution.remaining.is_empty() => value.clone(),
            Some(_) => {
                return Err(Error::NotFound {
                    path: path.to_string(),
                })
            }
            None => terminal.handler.call(&resolution.remaining)?,
        };
        resolution.result = Some(result);
    }

    Ok(resolution)
}

/// Find the node at `path` without instantiating it.
///
/// Dispatch hands back instances; tracing a class instead shows its
/// members even when the instance itself is callable.
fn locate(resolver: &Resolver, path: &str) -> Result<Node> {
    let segments = Segments::parse(path);
    let resolution = resolve(resolver, path, false)?;

    if !resolution.remaining.is_empty() {
        return Err(Error::NotFound {
            path: path.to_string(),
        });
    }

    let crumbs = &resolution.crumbs;
    match segments.iter().last() {
        None => Ok(Node::from(site::root())),
        Some(last) => {
            let parent = &crumbs[crumbs.len() - 2].handler;
            match parent.attribute(last) {
                Lookup::Found(node) => Ok(node),
                Lookup::Missing => Err(Error::NotFound {
                    path: path.to_string(),
                }),
            }
        }
    }
}

/// Trace the node at `path`.
pub fn trace(resolver: &Resolver, path: &str) -> Result<Vec<Crumb>> {
    let node = locate(resolver, path)?;
    Ok(resolver.trace(None, node).collect())
}

/// One discovered route.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub path: String,
    pub handler: String,
    pub endpoint: bool,
    pub options: Option<Options>,
}

fn join(prefix: &str, label: &str) -> String {
    if prefix == "/" {
        format!("/{}", label)
    } else {
        format!("{}/{}", prefix, label)
    }
}

/// List every route reachable from the site root, breadth first.
///
/// Classes are traced in turn, up to [`MAX_ROUTE_DEPTH`] levels down.
pub fn routes(resolver: &Resolver) -> Vec<Route> {
    let mut routes = Vec::new();
    let mut queue = VecDeque::from([("/".to_string(), Node::from(site::root()), 0usize)]);

    while let Some((prefix, node, depth)) = queue.pop_front() {
        for crumb in resolver.trace(None, node) {
            let path = match crumb.path() {
                Some(label) => join(&prefix, label),
                None => prefix.clone(),
            };

            if crumb.handler.is_class() && crumb.path.is_some() {
                if depth < MAX_ROUTE_DEPTH {
                    queue.push_back((path.clone(), crumb.handler.clone(), depth + 1));
                } else {
                    debug!(path = %path, "Route depth limit reached.");
                }
            }

            routes.push(Route {
                path,
                handler: crumb.handler.to_string(),
                endpoint: crumb.endpoint,
                options: crumb.options,
            });
        }
    }

    routes
}
