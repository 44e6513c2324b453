// src/physics/wave/grid.rs

/// Zweidimensionales Raster für Skalarwerte.
/// Flacher Puffer mit `index(i, j) = i * ny + j`; die Dimensionen stehen
/// nach der Konstruktion fest.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    data: Vec<f64>,
    nx: usize,
    ny: usize,
}

impl ScalarGrid {
    pub fn new(nx: usize, ny: usize) -> Self {
        Self {
            data: vec![0.0; nx * ny],
            nx,
            ny,
        }
    }

    /// Baut ein Raster aus einer Funktion über die Knotenindizes auf.
    pub fn from_fn(nx: usize, ny: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut grid = Self::new(nx, ny);
        for i in 0..nx {
            for j in 0..ny {
                grid.data[i * ny + j] = f(i, j);
            }
        }
        grid
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        i * self.ny + j
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.idx(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, v: f64) {
        let idx = self.idx(i, j);
        self.data[idx] = v;
    }

    /// Indexsicherer Zugriff mit vorzeichenbehafteten Indizes.
    /// Liefert 0.0 für jeden Index außerhalb des Rasters.
    pub fn get_signed(&self, i: isize, j: isize) -> f64 {
        if i < 0 || j < 0 || i as usize >= self.nx || j as usize >= self.ny {
            return 0.0;
        }
        self.data[i as usize * self.ny + j as usize]
    }

    pub fn fill(&mut self, v: f64) {
        self.data.fill(v);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let grid = ScalarGrid::new(4, 3);
        assert_eq!(grid.nx(), 4);
        assert_eq!(grid.ny(), 3);
        assert!(grid.as_slice().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_flat_layout() {
        let mut grid = ScalarGrid::new(4, 3);
        grid.set(1, 2, 5.0);
        // index(i, j) = i * ny + j
        assert_eq!(grid.as_slice()[1 * 3 + 2], 5.0);
        assert_eq!(grid.get(1, 2), 5.0);
    }

    #[test]
    fn test_from_fn() {
        let grid = ScalarGrid::from_fn(3, 3, |i, j| (i * 10 + j) as f64);
        assert_eq!(grid.get(0, 0), 0.0);
        assert_eq!(grid.get(2, 1), 21.0);
    }

    #[test]
    fn test_get_signed_outside_is_zero() {
        let mut grid = ScalarGrid::new(3, 3);
        grid.fill(1.0);

        assert_eq!(grid.get_signed(-1, 0), 0.0);
        assert_eq!(grid.get_signed(0, -1), 0.0);
        assert_eq!(grid.get_signed(3, 0), 0.0);
        assert_eq!(grid.get_signed(0, 3), 0.0);
        assert_eq!(grid.get_signed(2, 2), 1.0);
    }
}
