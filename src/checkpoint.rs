use std::path::PathBuf;

use crate::color::Color;
use crate::error::Result;
use crate::gc::solution_to_string;

/** receives every coloring proven conflict-free during the color reduction,
in strictly decreasing order of colors.
*/
pub trait CheckpointSink {
    /// called each time a conflict-free coloring using nb_colors colors is found
    fn on_feasible(&mut self, nb_colors:usize, colors:&[Color]) -> Result<()>;
}

/** ignores checkpoints */
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCheckpoint;

impl CheckpointSink for NoCheckpoint {
    fn on_feasible(&mut self, _nb_colors:usize, _colors:&[Color]) -> Result<()> { Ok(()) }
}

/** keeps every checkpoint in memory */
impl CheckpointSink for Vec<(usize, Vec<Color>)> {
    fn on_feasible(&mut self, nb_colors:usize, colors:&[Color]) -> Result<()> {
        self.push((nb_colors, colors.to_vec()));
        Ok(())
    }
}

/** writes each checkpoint into `<dir>/<nb_colors>.txt` (solution format) */
#[derive(Debug, Clone)]
pub struct DirCheckpoint {
    /// output directory
    dir: PathBuf,
}

impl DirCheckpoint {
    /** creates the sink (and the directory if it does not exist) */
    pub fn new<P:Into<PathBuf>>(dir:P) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// file in which the checkpoint with nb_colors colors is written
    pub fn path(&self, nb_colors:usize) -> PathBuf {
        self.dir.join(format!("{}.txt", nb_colors))
    }
}

impl CheckpointSink for DirCheckpoint {
    fn on_feasible(&mut self, nb_colors:usize, colors:&[Color]) -> Result<()> {
        std::fs::write(self.path(nb_colors), solution_to_string(nb_colors, colors))?;
        Ok(())
    }
}
