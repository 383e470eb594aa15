//! Grab-Geometrie: Ray/Plane-Schnitt mit Vorwärts-Clamp, Radial-Clamp,
//! Zylinder-Ebene und inkrementelle Rotation aus Drag-Deltas.

use glam::{Quat, Vec2, Vec3};

use super::PickRay;

/// Unterhalb dieses Abstands gilt die Kamera als auf der Ebene liegend.
pub const MIN_DISTANCE_FROM_PLANE: f32 = 0.001;
/// Unterhalb dieses |dot(ray, normal)| gilt der Strahl als parallel zur Ebene.
pub const MIN_RAY_PLANE_DOT: f32 = 0.00001;

/// Ebene, auf die die 2D-Mausbewegung projiziert wird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrabPlane {
    /// Punkt auf der Ebene
    pub point: Vec3,
    /// Normale (normiert)
    pub normal: Vec3,
}

impl GrabPlane {
    /// Horizontale Ebene (Normale = Welt-Oben) durch `point`.
    pub fn horizontal(point: Vec3) -> Self {
        Self {
            point,
            normal: Vec3::Y,
        }
    }
}

/// Schneidet den Pick-Ray mit der Grab-Ebene.
///
/// Liefert immer einen Punkt: liegt der Schnitt hinter der Kamera, jenseits
/// von `max_forward_distance` oder ist der Strahl parallel zur Ebene, wird
/// der Punkt auf maximale Vorwärts-Distanz in der Ebene umgeleitet.
pub fn intersect_ray_with_plane(
    camera_position: Vec3,
    ray: &PickRay,
    plane: &GrabPlane,
    max_forward_distance: f32,
) -> Vec3 {
    let local_point_on_plane = plane.point - camera_position;
    let distance_from_plane = local_point_on_plane.dot(plane.normal);
    if distance_from_plane.abs() < MIN_DISTANCE_FROM_PLANE {
        // Kamera berührt die Ebene
        return plane.point;
    }

    let dir_dot_norm = ray.direction.dot(plane.normal);
    if dir_dot_norm.abs() > MIN_RAY_PLANE_DOT {
        let distance_to_intersection = distance_from_plane / dir_dot_norm;
        if distance_to_intersection > 0.0 && distance_to_intersection < max_forward_distance {
            return camera_position + ray.direction * distance_to_intersection;
        }
    }

    // Strahl in die Ebene projizieren und auf Maximaldistanz nach vorne legen
    let along_plane = (ray.direction - plane.normal * dir_dot_norm).normalize_or_zero();
    camera_position + along_plane * max_forward_distance + plane.normal * distance_from_plane
}

/// Begrenzt `point` radial auf `max_distance` um `center`.
pub fn clamp_to_radius(center: Vec3, point: Vec3, max_distance: f32) -> Vec3 {
    let relative = point - center;
    let distance = relative.length();
    if distance > max_distance {
        center + relative * (max_distance / distance)
    } else {
        point
    }
}

/// Nächster Punkt auf dem Pick-Ray zu `target` (Projektion per Skalarprodukt).
///
/// Wird nur für den allerersten Grab-Punkt verwendet.
pub fn nearest_point_on_ray(camera_position: Vec3, direction: Vec3, target: Vec3) -> Vec3 {
    let distance_to_grab = (target - camera_position).dot(direction);
    camera_position + direction * distance_to_grab
}

/// Horizontaler (XZ-)Abstand zwischen Kamera und Punkt.
pub fn xz_distance(camera_position: Vec3, point: Vec3) -> f32 {
    let mut offset = point - camera_position;
    offset.y = 0.0;
    offset.length()
}

/// Ebene, die der Kamera zugewandt ist und im festen XZ-Abstand vor ihr liegt.
///
/// `None`, wenn die Kamera senkrecht nach oben oder unten blickt.
pub fn cylinder_plane(camera_position: Vec3, camera_forward: Vec3, xz_distance: f32) -> Option<GrabPlane> {
    let mut normal = camera_forward;
    normal.y = 0.0;
    let normal = normal.try_normalize()?;
    Some(GrabPlane {
        point: camera_position + normal * xz_distance,
        normal,
    })
}

/// Inkrementelle Rotation aus einem Drag-Delta.
///
/// Achse = `normalize(cross(dx·right − dy·up, forward))`,
/// Winkel = `strength_deg · |delta|` in Grad. Ein Null-Delta ergibt die Identität.
pub fn rotation_from_drag(delta: Vec2, camera_orientation: Quat, strength_deg: f32) -> Quat {
    let right = camera_orientation * Vec3::X;
    let up = camera_orientation * Vec3::Y;
    let forward = camera_orientation * Vec3::NEG_Z;

    let drag_offset = right * delta.x - up * delta.y;
    let Some(axis) = drag_offset.cross(forward).try_normalize() else {
        return Quat::IDENTITY;
    };
    let angle_deg = strength_deg * delta.length();
    Quat::from_axis_angle(axis, angle_deg.to_radians())
}
