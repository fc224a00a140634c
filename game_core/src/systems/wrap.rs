use glam::Vec2;
use hecs::{Entity, World};

use crate::{Body, Kind, PlayArea};

/// Transient toroidal image of an entity near an edge
///
/// Lives for one frame only; it borrows shape and state from its source
/// entity and adds nothing but a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mirror {
    pub source: Entity,
    pub offset: Vec2,
}

impl Mirror {
    /// The source body moved onto this image's position
    pub fn body(&self, source: &Body) -> Body {
        let mut body = *source;
        body.translate(self.offset);
        body
    }
}

/// Images for every non-bullet entity whose bounding circle crosses an edge
pub fn generate_mirrors(world: &World, area: &PlayArea) -> Vec<Mirror> {
    let mut mirrors = Vec::new();
    for (entity, (body, kind)) in world.query::<(&Body, &Kind)>().iter() {
        if matches!(kind, Kind::Bullet | Kind::Star) || body.dead {
            continue;
        }
        let proximity = area.proximity(body.pos, body.radius);
        mirrors.extend(
            area.mirror_offsets(proximity)
                .into_iter()
                .map(|offset| Mirror {
                    source: entity,
                    offset,
                }),
        );
    }
    mirrors
}
