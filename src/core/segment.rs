//! Schnitt-Segmente und deren Duplikat-Bereinigung.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Feste Rundungsgenauigkeit der Segment-Schlüssel (1e-6 Modelleinheiten).
const KEY_SCALE: f64 = 1e6;

/// Endliche gerade Strecke zwischen zwei Punkten (semantisch ungerichtet).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Erster Endpunkt
    pub a: DVec3,
    /// Zweiter Endpunkt
    pub b: DVec3,
}

/// Kanonischer, hashbarer Schlüssel eines Segments.
///
/// Beide Endpunkte gerundet und lexikographisch sortiert.
pub type SegmentKey = [i64; 6];

impl Segment {
    /// Erstellt ein Segment aus zwei Endpunkten.
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self { a, b }
    }

    /// Länge des Segments.
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Mittelpunkt des Segments.
    pub fn midpoint(&self) -> DVec3 {
        self.a.lerp(self.b, 0.5)
    }

    /// Segment mit vertauschten Endpunkten.
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }

    /// Ist das Segment nicht länger als `tolerance`?
    pub fn is_degenerate(&self, tolerance: f64) -> bool {
        self.length() <= tolerance
    }

    /// Kanonischer Schlüssel (unabhängig von der Endpunkt-Reihenfolge).
    pub fn key(&self) -> SegmentKey {
        let ka = round_point(self.a);
        let kb = round_point(self.b);
        let (first, second) = if ka <= kb { (ka, kb) } else { (kb, ka) };
        [
            first[0], first[1], first[2], second[0], second[1], second[2],
        ]
    }
}

fn round_point(p: DVec3) -> [i64; 3] {
    [
        (p.x * KEY_SCALE).round() as i64,
        (p.y * KEY_SCALE).round() as i64,
        (p.z * KEY_SCALE).round() as i64,
    ]
}

/// Entfernt degenerierte Segmente und Duplikate.
///
/// Segmente mit Länge ≤ `tolerance` werden vor der Schlüsselbildung verworfen,
/// spätere Duplikate eines bereits gesehenen Schlüssels ebenso. Die Reihenfolge
/// des ersten Auftretens bleibt erhalten; zweimaliges Anwenden ändert nichts.
pub fn unique_segments(segments: &[Segment], tolerance: f64) -> Vec<Segment> {
    let mut seen: HashSet<SegmentKey> = HashSet::with_capacity(segments.len());
    segments
        .iter()
        .filter(|s| !s.is_degenerate(tolerance))
        .filter(|s| seen.insert(s.key()))
        .copied()
        .collect()
}
