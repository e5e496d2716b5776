//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeSet;

use derive_new::new;
use ipnetwork::Ipv4Network;
use serde::{Deserialize, Serialize};

// A route: an address prefix bound to an MPLS label.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, new)]
#[derive(Deserialize, Serialize)]
pub struct Route {
    pub prefix: Ipv4Network,
    pub label: u32,
}

// Minimal route database.
//
// A bare set of routes with add/remove; not yet consulted by the session
// state machine when building Label Mapping advertisements.
#[derive(Debug, Default)]
pub struct RouteDb {
    routes: BTreeSet<Route>,
}

// ===== impl RouteDb =====

impl RouteDb {
    pub fn new() -> RouteDb {
        RouteDb::default()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn add(&mut self, route: Route) -> bool {
        self.routes.insert(route)
    }

    pub fn remove(&mut self, route: &Route) -> bool {
        self.routes.remove(route)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }
}
