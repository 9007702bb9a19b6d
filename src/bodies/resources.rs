//! Resources tracking texture requests and the bodies they produced

use bevy::prelude::*;

/// Resource pointing at the root all pivots are parented to.
#[derive(Resource, Copy, Clone, Debug)]
pub struct WorldRoot(pub Entity);

/// Runtime handle to a planet that is part of the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitingBody {
    pub registry_index: usize,
    pub pivot: Entity,
    pub body: Entity,
    pub angular_speed: f32,
}

/// Planets currently in the scene, in the order their textures resolved.
#[derive(Resource, Default, Debug)]
pub struct ActiveBodies {
    pub bodies: Vec<OrbitingBody>,
}

impl ActiveBodies {
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitingBody> {
        self.bodies.iter()
    }

    pub fn contains(&self, registry_index: usize) -> bool {
        self.bodies
            .iter()
            .any(|b| b.registry_index == registry_index)
    }
}

/// What a texture is for once it arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureTarget {
    Starfield,
    Sun,
    Planet(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Attached,
    Failed,
}

pub struct TextureRequest {
    pub target: TextureTarget,
    pub handle: Handle<Image>,
    pub status: RequestStatus,
}

/// Outstanding and settled texture loads.
///
/// Each request settles at most once; later load notifications for a settled
/// request are ignored, so a body can never be attached twice.
#[derive(Resource, Default)]
pub struct TextureRequests {
    pub requests: Vec<TextureRequest>,
}

impl TextureRequests {
    pub fn push(&mut self, target: TextureTarget, handle: Handle<Image>) {
        self.requests.push(TextureRequest {
            target,
            handle,
            status: RequestStatus::Pending,
        });
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Mark a request as attached. Returns `true` only on the first call.
    pub fn resolve(&mut self, index: usize) -> bool {
        self.settle(index, RequestStatus::Attached)
    }

    /// Mark a request as failed. Returns `true` only on the first call.
    pub fn fail(&mut self, index: usize) -> bool {
        self.settle(index, RequestStatus::Failed)
    }

    fn settle(&mut self, index: usize, status: RequestStatus) -> bool {
        match self.requests.get_mut(index) {
            Some(req) if req.status == RequestStatus::Pending => {
                req.status = status;
                true
            }
            _ => false,
        }
    }

    pub fn pending_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_settles_once() {
        let mut requests = TextureRequests::default();
        requests.push(TextureTarget::Planet(2), Handle::default());
        requests.push(TextureTarget::Sun, Handle::default());

        assert!(requests.resolve(0));
        assert!(!requests.resolve(0), "second resolution must be ignored");
        assert!(!requests.fail(0));
        assert_eq!(requests.requests[0].status, RequestStatus::Attached);
        assert_eq!(requests.pending_count(), 1);
    }

    #[test]
    fn test_failed_request_is_never_attached() {
        let mut requests = TextureRequests::default();
        requests.push(TextureTarget::Starfield, Handle::default());

        assert!(requests.fail(0));
        assert!(!requests.resolve(0));
        assert_eq!(requests.requests[0].status, RequestStatus::Failed);
        assert_eq!(requests.pending_count(), 0);
    }

    #[test]
    fn test_out_of_range_request_is_ignored() {
        let mut requests = TextureRequests::default();
        assert!(!requests.resolve(3));
        assert!(requests.is_empty());
    }

    #[test]
    fn test_active_bodies_lookup() {
        let mut active = ActiveBodies::default();
        assert!(active.is_empty());
        active.bodies.push(OrbitingBody {
            registry_index: 4,
            pivot: Entity::PLACEHOLDER,
            body: Entity::PLACEHOLDER,
            angular_speed: 0.004,
        });
        assert_eq!(active.len(), 1);
        assert!(active.contains(4));
        assert!(!active.contains(0));
    }
}
