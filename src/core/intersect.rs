//! Schnitt einer unendlichen Geraden mit einer Fläche (inkl. Löchern).

use super::{BoundaryEdge, BoundaryIndex, Face, Segment};
use glam::DVec3;

/// Schnittpunkt der Geraden mit einer Begrenzungskante.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    point: DVec3,
    /// Vorzeichenbehafteter Abstand entlang der Richtung ab Ursprung
    t: f64,
    edge: BoundaryEdge,
}

/// Alle gültigen Schnitt-Segmente der Geraden `(origin, direction)` innerhalb der Fläche.
///
/// `origin` und `direction` müssen bereits in der Flächenebene liegen. Die
/// Schnittpunkte mit allen Begrenzungskanten werden entlang der Richtung sortiert
/// und paarweise (1.–2., 3.–4., …) zu Kandidaten verbunden; ein übrig bleibender
/// Punkt wird verworfen. Ein Kandidat zählt nur, wenn sein Mittelpunkt auf der
/// nutzbaren Oberfläche liegt. So fallen Lücken durch Löcher und konkave Buchten heraus.
pub fn face_segments(
    face: &Face,
    boundary: &BoundaryIndex,
    origin: DVec3,
    direction: DVec3,
    tolerance: f64,
) -> Vec<Segment> {
    if direction.length() <= f64::EPSILON {
        return Vec::new();
    }
    let dir = direction.normalize();

    let mut crossings: Vec<Crossing> = boundary
        .edges()
        .iter()
        .filter(|edge| edge.length() > tolerance)
        .filter_map(|edge| {
            let point =
                intersect_line_line(origin, dir, edge.line_point, edge.line_direction, tolerance)?;
            edge.contains(point, tolerance).then_some(Crossing {
                point,
                t: (point - origin).dot(dir),
                edge: *edge,
            })
        })
        .collect();

    if crossings.is_empty() {
        return Vec::new();
    }

    crossings.sort_by(|a, b| a.t.total_cmp(&b.t));
    let points = resolve_vertex_crossings(&crossings, dir, face.normal(), tolerance);

    points
        .chunks_exact(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .filter(|segment| !segment.is_degenerate(tolerance))
        .filter(|segment| {
            face.classify_point(segment.midpoint(), tolerance)
                .is_on_surface()
        })
        .collect()
}

/// Schnittpunkt zweier unendlicher Geraden im Raum.
///
/// `None` bei parallelen Geraden oder wenn die nächsten Punkte weiter als
/// `tolerance` auseinander liegen (windschief).
pub fn intersect_line_line(
    p1: DVec3,
    d1: DVec3,
    p2: DVec3,
    d2: DVec3,
    tolerance: f64,
) -> Option<DVec3> {
    let a = d1.dot(d1);
    let b = d1.dot(d2);
    let c = d2.dot(d2);
    let denom = a * c - b * b;
    if denom <= 1e-12 * a * c {
        return None;
    }

    let w = p1 - p2;
    let d = d1.dot(w);
    let e = d2.dot(w);
    let s = (b * e - c * d) / denom;
    let t = (a * e - b * d) / denom;

    let q1 = p1 + d1 * s;
    let q2 = p2 + d2 * t;
    (q1.distance(q2) <= tolerance).then_some(q1)
}

/// Fasst doppelte Treffer an einer gemeinsamen Ecke zusammen.
///
/// Trifft die Gerade eine Ecke, melden beide angrenzenden Kanten denselben Punkt.
/// Liegen die Kanten auf verschiedenen Seiten der Geraden, kreuzt sie die
/// Begrenzung dort einmal; liegen sie auf derselben Seite, berührt sie sie nur
/// (zweimal zählen, damit die Paarung stimmt).
fn resolve_vertex_crossings(
    crossings: &[Crossing],
    dir: DVec3,
    normal: DVec3,
    tolerance: f64,
) -> Vec<DVec3> {
    let mut points = Vec::with_capacity(crossings.len());
    let mut i = 0;
    while i < crossings.len() {
        let anchor = crossings[i].point;
        let group_len = crossings[i..]
            .iter()
            .take_while(|c| c.point.distance(anchor) <= tolerance)
            .count();
        let group = &crossings[i..i + group_len];

        if let [first, second] = group {
            let side_a = side_of_line(first, dir, normal);
            let side_b = side_of_line(second, dir, normal);
            if side_a * side_b < 0.0 {
                points.push(first.point);
            } else {
                points.push(first.point);
                points.push(second.point);
            }
        } else {
            points.extend(group.iter().map(|c| c.point));
        }

        i += group_len;
    }
    points
}

/// Seite (Vorzeichen) des vom Treffer abgewandten Kanten-Endpunkts relativ zur Geraden.
fn side_of_line(crossing: &Crossing, dir: DVec3, normal: DVec3) -> f64 {
    let edge = &crossing.edge;
    let far = if edge.start.distance(crossing.point) > edge.end.distance(crossing.point) {
        edge.start
    } else {
        edge.end
    };
    dir.cross(far - crossing.point).dot(normal)
}
