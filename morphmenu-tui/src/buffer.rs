use morphmenu::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Cell {
    pub fn blank(bg: Rgb) -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg,
            bold: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16, bg: Rgb) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::blank(bg); (width as usize) * (height as usize)],
        }
    }

    /// A buffer no painted frame can equal, so diffing against it repaints
    /// every cell.
    pub fn stale(width: u16, height: u16) -> Self {
        let stale = Cell {
            char: '\0',
            ..Cell::blank(Rgb::default())
        };
        Self {
            width,
            height,
            cells: vec![stale; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Cells that differ from `other`, with their coordinates.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn fill(&mut self, bg: Rgb) {
        for cell in &mut self.cells {
            *cell = Cell::blank(bg);
        }
    }
}
