use std::path::PathBuf;

use argh::FromArgs;
use bitmapper_core::{PackingConfig, Remainder, pack};
use log::{debug, error, info, warn};

use crate::drop_zone::{DragOperation, DropDelegate, DropInfo, DropZone};
use crate::error::{Error, Result};

mod drop_zone;
mod error;
mod load;
mod minifb_preview;

#[derive(FromArgs)]
/// Convert a bitmap into a PROGMEM C array
struct Args {
    /// image files, handled as if dropped onto the converter
    #[argh(positional)]
    inputs: Vec<String>,

    /// pixels packed into one array item
    #[argh(option, short = 'b', default = "8")]
    bits: u8,

    /// name of the generated array
    #[argh(option, short = 'n', default = "String::from(\"YOUR_NAME\")")]
    name: String,

    /// emit partial items at the end of a row instead of dropping them
    #[argh(switch, short = 'f')]
    flush: bool,

    /// write the array to this file instead of stdout
    #[argh(option, short = 'o')]
    output: Option<String>,

    /// additional accepted file extension, bmp is always accepted
    #[argh(option, short = 'e')]
    extension: Vec<String>,

    /// show the binarized image in a window
    #[argh(switch, short = 'p')]
    preview: bool,
}

/// Remembers the first file of a drop.
#[derive(Default)]
struct Selection {
    path: Option<PathBuf>,
}

impl DropDelegate for Selection {
    fn dragging_exited(&mut self, info: &DropInfo) {
        debug!("Drag left without a drop: {:?}", info.paths);
    }

    fn perform_drop(&mut self, info: &DropInfo) -> bool {
        self.path = info.paths.first().cloned();
        true
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    if let Err(err) = run(args) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let remainder = if args.flush {
        Remainder::Flush
    } else {
        Remainder::Drop
    };
    let config = PackingConfig::new(args.bits)?
        .with_remainder(remainder)
        .with_name(args.name);

    let mut extensions = vec!["bmp"];
    extensions.extend(args.extension.iter().map(String::as_str));
    let mut zone = DropZone::with_delegate(Selection::default());
    zone.register_extensions(&extensions);

    let info = DropInfo::new(args.inputs.iter().map(PathBuf::from).collect());
    let operation = zone.dragging_entered(&info);
    if operation == DragOperation::Generic || zone.dragging_updated(&info) == DragOperation::Generic {
        zone.dragging_exited(&info);
        return Err(match info.paths.into_iter().next() {
            Some(path) => Error::Rejected(path),
            None => Error::NoInput,
        });
    }
    debug!("Dropping {} files with {operation:?}", info.paths.len());
    if !(zone.prepare_for_drop(&info) && zone.perform_drop(&info)) {
        return Err(Error::NoInput);
    }

    let path = zone
        .delegate()
        .and_then(|selection| selection.path.clone())
        .ok_or(Error::NoInput)?;
    if info.paths.len() > 1 {
        warn!("Only converting the first of {} files", info.paths.len());
    }
    // A drop is accepted when any file matches, the first one still has to
    if !zone.accepts(&path) {
        return Err(Error::Rejected(path));
    }

    let bitmap = load::load_bitmap(&path)?;
    let grid = bitmap.grid()?;
    let text = pack(&grid, &config);

    match &args.output {
        Some(output) => {
            std::fs::write(output, &text)?;
            info!("Wrote {} bytes to {output}", text.len());
        }
        None => print!("{text}"),
    }

    if args.preview {
        minifb_preview::show(&bitmap.title(), &grid)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::from_args(&["bitmapper"], &["logo.bmp"]).unwrap();
        assert_eq!(args.inputs, vec!["logo.bmp"]);
        assert_eq!(args.bits, 8);
        assert_eq!(args.name, "YOUR_NAME");
        assert!(!args.flush && !args.preview);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_options() {
        let args = Args::from_args(
            &["bitmapper"],
            &["-b", "4", "-n", "logo", "-f", "-e", "png", "-o", "out.h", "a.png"],
        )
        .unwrap();
        assert_eq!(args.bits, 4);
        assert_eq!(args.name, "logo");
        assert!(args.flush);
        assert_eq!(args.extension, vec!["png"]);
        assert_eq!(args.output.as_deref(), Some("out.h"));
    }

    #[test]
    fn test_selection_takes_first_file() {
        let mut zone = DropZone::with_delegate(Selection::default());
        zone.register_extensions(&["bmp"]);
        let info = DropInfo::new(vec![PathBuf::from("a.bmp"), PathBuf::from("b.bmp")]);
        assert!(zone.perform_drop(&info));
        assert_eq!(
            zone.delegate().unwrap().path.as_deref(),
            Some(std::path::Path::new("a.bmp"))
        );
    }

    #[test]
    fn test_converts_to_file() {
        use image::{GrayImage, ImageFormat, Luma};

        let base = std::env::temp_dir().join(format!("bitmapper-run-{}", std::process::id()));
        let input = base.with_extension("bmp");
        let output = base.with_extension("h");
        let mut gray = GrayImage::from_pixel(5, 1, Luma([0]));
        gray.put_pixel(2, 0, Luma([255]));
        gray.save_with_format(&input, ImageFormat::Bmp).unwrap();

        let args = Args::from_args(
            &["bitmapper"],
            &[
                "-b", "2", "-f", "-n", "logo",
                "-o", output.to_str().unwrap(),
                input.to_str().unwrap(),
            ],
        )
        .unwrap();
        run(args).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&output).unwrap();
        assert_eq!(
            text,
            "// width: 5 height: 1\nPROGMEM const unsigned char logo[] = {\n5, 1,\n0x3, 0x1, 0x2\n\n};"
        );
    }

    #[test]
    fn test_rejects_unaccepted_drop() {
        let args = Args::from_args(&["bitmapper"], &["notes.txt"]).unwrap();
        assert!(matches!(run(args), Err(Error::Rejected(_))));

        let args = Args::from_args(&["bitmapper"], &[]).unwrap();
        assert!(matches!(run(args), Err(Error::NoInput)));

        let args = Args::from_args(&["bitmapper"], &["-b", "0", "a.bmp"]).unwrap();
        assert!(matches!(run(args), Err(Error::Config(_))));
    }
}
