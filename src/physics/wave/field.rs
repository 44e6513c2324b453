// src/physics/wave/field.rs

use crate::math::error::{FieldError, FieldResult};
use crate::math::types::{Bounds2D, Point2D};
use crate::math::utils::comparison;

use super::config::FieldConfig;
use super::grid::ScalarGrid;

/// Diskretisiertes Feld der Wellengleichung ∂²f/∂t² = v²(∂²f/∂x² + ∂²f/∂y²).
///
/// Hält pro Gitterknoten die Auslenkung und deren Zeitableitung und
/// integriert beide explizit vorwärts. Die Randknoten werden in jedem
/// Schritt auf 0 gezwungen (absorbierender Rand).
#[derive(Debug, Clone)]
pub struct Field {
    val: ScalarGrid,
    val_speed: ScalarGrid,
    scratch: ScalarGrid,
    bounds: Bounds2D,
    step: f64,
    speed: f64,
}

/// Knotenanzahl pro Achse für eine Domäne: `floor((max - min) / step)`.
/// Der Stencil braucht mindestens einen inneren Knoten, also 3x3.
pub(crate) fn cell_counts(min: Point2D, max: Point2D, step: f64) -> FieldResult<(usize, usize)> {
    if !step.is_finite() || step <= 0.0 {
        return Err(FieldError::InvalidDomain {
            message: format!("step must be positive and finite, got {step}"),
        });
    }

    let nx = ((max.x - min.x) / step).floor();
    let ny = ((max.y - min.y) / step).floor();
    if !(nx >= 3.0 && ny >= 3.0) {
        return Err(FieldError::InvalidDomain {
            message: format!("domain too small for the stencil: {nx}x{ny} nodes, need at least 3x3"),
        });
    }

    Ok((nx as usize, ny as usize))
}

impl Field {
    /// Legt ein Feld über dem Rechteck `[min, max]` mit Gitterweite `step` an.
    ///
    /// `max` wird auf `min + step * (nx, ny)` nachgezogen, damit die
    /// gespeicherte Domäne ein exaktes Vielfaches der Gitterweite ist.
    /// Beide Gitter starten auf 0.
    pub fn new(min: Point2D, max: Point2D, step: f64, speed: f64) -> FieldResult<Self> {
        let (nx, ny) = cell_counts(min, max, step)?;

        let max = min + Point2D::new(step * nx as f64, step * ny as f64);
        let bounds = Bounds2D::new(min, max)?;

        Ok(Self {
            val: ScalarGrid::new(nx, ny),
            val_speed: ScalarGrid::new(nx, ny),
            scratch: ScalarGrid::new(nx, ny),
            bounds,
            step,
            speed,
        })
    }

    pub fn from_config(config: &FieldConfig) -> FieldResult<Self> {
        Self::new(config.min, config.max, config.step, config.speed)
    }

    /// Ersetzt das Wertegitter vollständig durch `f0`.
    ///
    /// Das Geschwindigkeitsgitter bleibt unberührt; konsistente
    /// Anfangsbedingungen liegen beim Aufrufer. Bei abweichenden
    /// Dimensionen wird der Aufruf abgelehnt und das Feld nicht verändert.
    pub fn set_field(&mut self, f0: ScalarGrid) -> FieldResult<()> {
        if f0.nx() != self.val.nx() || f0.ny() != self.val.ny() {
            return Err(FieldError::DimensionMismatch {
                expected_nx: self.val.nx(),
                expected_ny: self.val.ny(),
                actual_nx: f0.nx(),
                actual_ny: f0.ny(),
            });
        }

        self.val = f0;
        Ok(())
    }

    /// Führt einen expliziten Zeitschritt der Größe `dt` aus.
    ///
    /// Innere Knoten: zentrierter Dreipunkt-Stencil für die zweiten
    /// Ortsableitungen, dann semi-implizites Euler-Verfahren, d.h. erst
    /// die Geschwindigkeit aktualisieren und die Auslenkung anschließend
    /// mit der frischen Geschwindigkeit integrieren. Alle neuen Werte
    /// landen zuerst im Scratch-Puffer, der Stencil liest also nur den
    /// vorherigen Zeitschritt. Stabilität ist Sache des Aufrufers,
    /// siehe [`Field::is_stable`].
    pub fn update(&mut self, dt: f64) {
        let (nx, ny) = (self.val.nx(), self.val.ny());

        for i in 0..nx {
            for j in 0..ny {
                if i == 0 || j == 0 || i == nx - 1 || j == ny - 1 {
                    // Randgeschwindigkeit bleibt stehen, nur der Wert wird genullt.
                    self.scratch.set(i, j, 0.0);
                    continue;
                }

                let dfdx_right = (self.val.get(i + 1, j) - self.val.get(i, j)) / self.step;
                let dfdx_left = (self.val.get(i, j) - self.val.get(i - 1, j)) / self.step;
                let d2fdx2 = (dfdx_right - dfdx_left) / self.step;

                let dfdy_up = (self.val.get(i, j + 1) - self.val.get(i, j)) / self.step;
                let dfdy_down = (self.val.get(i, j) - self.val.get(i, j - 1)) / self.step;
                let d2fdy2 = (dfdy_up - dfdy_down) / self.step;

                let accel = self.speed * (d2fdx2 + d2fdy2);

                let speed_new = self.val_speed.get(i, j) + accel * dt;
                self.val_speed.set(i, j, speed_new);
                self.scratch.set(i, j, self.val.get(i, j) + speed_new * dt);
            }
        }

        std::mem::swap(&mut self.val, &mut self.scratch);
    }

    /// Teilt `dt` in gleich große Teilschritte von höchstens `max_substep`
    /// auf und integriert jeden einzeln.
    ///
    /// Gedacht für Treiber, die eine ungedeckelte Frame-Zeit durchreichen:
    /// die Semantik von [`Field::update`] bleibt unverändert, nur die
    /// Schrittweite wird begrenzt.
    pub fn advance(&mut self, dt: f64, max_substep: f64) {
        if dt <= 0.0 {
            return;
        }

        let n = if max_substep > 0.0 && dt > max_substep {
            (dt / max_substep).ceil() as usize
        } else {
            1
        };

        let sub_dt = dt / n as f64;
        for _ in 0..n {
            self.update(sub_dt);
        }
    }

    /// Bilineare Abtastung des Feldes an einem beliebigen Punkt.
    ///
    /// Punkte außerhalb der Domäne liefern 0; am äußeren Rand fehlende
    /// Nachbarknoten gehen als 0 in die Interpolation ein.
    pub fn value_at(&self, point: Point2D) -> f64 {
        if !self.bounds.contains_point(point) {
            return 0.0;
        }

        let scaled = (point - self.bounds.min) / self.step;
        let fx = scaled.x.floor();
        let fy = scaled.y.floor();
        let (ix, iy) = (fx as isize, fy as isize);

        let bottom_left = self.val.get_signed(ix, iy);
        let bottom_right = self.val.get_signed(ix + 1, iy);
        let top_left = self.val.get_signed(ix, iy + 1);
        let top_right = self.val.get_signed(ix + 1, iy + 1);

        let tx = scaled.x - fx;
        let ty = scaled.y - fy;

        let bottom = comparison::lerp(bottom_left, bottom_right, tx);
        let top = comparison::lerp(top_left, top_right, tx);
        comparison::lerp(bottom, top, ty)
    }

    pub fn min(&self) -> Point2D {
        self.bounds.min
    }

    pub fn max(&self) -> Point2D {
        self.bounds.max
    }

    pub fn bounds(&self) -> &Bounds2D {
        &self.bounds
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn nx(&self) -> usize {
        self.val.nx()
    }

    pub fn ny(&self) -> usize {
        self.val.ny()
    }

    /// Lesezugriff auf das rohe Wertegitter.
    pub fn values(&self) -> &ScalarGrid {
        &self.val
    }

    /// Kennzahl `speed * dt² / step²` der informellen Stabilitätsbedingung.
    pub fn courant_number(&self, dt: f64) -> f64 {
        self.speed * dt * dt / (self.step * self.step)
    }

    /// Prüft die CFL-artige Stabilitätsbedingung für die Schrittweite `dt`.
    /// Rein informativ, [`Field::update`] erzwingt nichts.
    pub fn is_stable(&self, dt: f64) -> bool {
        self.courant_number(dt) <= 0.5
    }

    /// Betragsmaximum der Auslenkung, z.B. für Diagnose-Ausgaben.
    pub fn max_amplitude(&self) -> f64 {
        self.val
            .as_slice()
            .iter()
            .fold(0.0_f64, |m, v| m.max(v.abs()))
    }
}
