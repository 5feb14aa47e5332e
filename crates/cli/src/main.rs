mod io;
mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use homogebra::{Axis, ConicRootSolver, Transformation};
use io::{ConicDoc, Correspondences, MappedDoc, MatrixDoc, Triple, TraceDoc};
use provenance::Payload;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "homogebra")]
#[command(about = "Driver for the projective-geometry kernel")]
struct Cmd {
    /// Optional run label; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AxisArg {
    X,
    Y,
}

impl From<AxisArg> for Axis {
    fn from(a: AxisArg) -> Self {
        match a {
            AxisArg::X => Axis::X,
            AxisArg::Y => Axis::Y,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Fit the homography taking four points to four images
    Fit {
        /// JSON with `from` and `to`, four triples each
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Apply a stored transformation to one point and print the image
    Map {
        #[arg(long)]
        transformation: PathBuf,
        /// Triple as JSON, e.g. `[1, [2, 0.5], 1]`
        #[arg(long)]
        point: String,
        /// Use the inverse transformation
        #[arg(long)]
        inverse: bool,
    },
    /// Scan a conic along one axis and write its real points
    Trace {
        #[arg(long)]
        conic: PathBuf,
        /// Axis held fixed on each scan line
        #[arg(long, value_enum, default_value_t = AxisArg::X)]
        axis: AxisArg,
        #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
        from: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        to: f64,
        #[arg(long, default_value_t = 200)]
        samples: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let tag = cmd.tag.as_deref();
    match cmd.action {
        Action::Fit { input, out } => fit(&input, &out, tag).map(|_| ()),
        Action::Map {
            transformation,
            point,
            inverse,
        } => {
            let doc = map(&transformation, &point, inverse)?;
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
        Action::Trace {
            conic,
            axis,
            from,
            to,
            samples,
            out,
        } => trace(&conic, axis, (from, to), samples, &out, tag).map(|_| ()),
        Action::Report => {
            println!("{}", serde_json::to_string_pretty(&report(tag))?);
            Ok(())
        }
    }
}

fn fit(input: &Path, out: &Path, tag: Option<&str>) -> Result<Transformation> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "fit");
    let doc: Correspondences = io::read_json(input)?;
    let (from, to) = doc.points();
    let Some(t) = Transformation::from_correspondences(&from, &to) else {
        bail!(
            "degenerate correspondences in {}: three points of a quadruple are collinear",
            input.display()
        );
    };
    io::write_json(out, &MatrixDoc::from(t.matrix()))?;
    provenance::write_sidecar(
        out,
        Payload::new("fit", json!({ "input": input.display().to_string() }), tag.map(str::to_owned)),
    )?;
    Ok(t)
}

fn map(transformation: &Path, point: &str, inverse: bool) -> Result<MappedDoc> {
    tracing::info!(transformation = %transformation.display(), point, inverse, "map");
    let stored: MatrixDoc = io::read_json(transformation)?;
    let mut t = Transformation::new(stored.to_matrix());
    if inverse {
        t = t.inverse().context("stored transformation is singular")?;
    }
    let triple: Triple = serde_json::from_str(point).context("parsing --point")?;
    let p = io::to_point(&triple);
    if p.is_zero() {
        bail!("--point is the zero triple");
    }
    let image = t.apply(&p);
    let position = image.real_position();
    Ok(MappedDoc {
        image: io::from_point(&image),
        normalized: io::from_point(&image.normalized()),
        position: position.filter(|r| !r.at_infinity).map(|r| [r.x, r.y]),
        at_infinity: position.is_some_and(|r| r.at_infinity),
    })
}

fn trace(
    conic: &Path,
    axis: AxisArg,
    (from, to): (f64, f64),
    samples: usize,
    out: &Path,
    tag: Option<&str>,
) -> Result<usize> {
    tracing::info!(conic = %conic.display(), ?axis, from, to, samples, tag = ?tag, "trace");
    if samples == 0 {
        bail!("--samples must be positive");
    }
    if !(from.is_finite() && to.is_finite()) {
        bail!("scan range must be finite");
    }
    let doc: ConicDoc = io::read_json(conic)?;
    let equation = doc.to_conic();
    let step = if samples > 1 {
        (to - from) / (samples - 1) as f64
    } else {
        0.0
    };
    let scan = (0..samples).map(|i| from + step * i as f64);
    let points = ConicRootSolver::new(&equation).trace(axis.into(), scan);
    tracing::info!(points = points.len(), "traced");

    let count = points.len();
    let axis_name = match axis {
        AxisArg::X => "x",
        AxisArg::Y => "y",
    };
    io::write_json(
        out,
        &TraceDoc {
            axis: axis_name.to_string(),
            samples,
            points: points.into_iter().map(|(x, y)| [x, y]).collect(),
        },
    )?;
    provenance::write_sidecar(
        out,
        Payload::new(
            "trace",
            json!({ "conic": conic.display().to_string(), "axis": axis_name, "from": from, "to": to, "samples": samples }),
            tag.map(str::to_owned),
        ),
    )?;
    Ok(count)
}

fn report(tag: Option<&str>) -> serde_json::Value {
    provenance::block("report", json!({}), tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use homogebra::HomogeneousCoordinate;
    use std::fs;
    use tempfile::tempdir;

    const SQUARE_TO_DOUBLE: &str = r#"{
        "from": [[1, 0, 1], [0, 1, 1], [1, 1, 1], [0, 0, 1]],
        "to":   [[2, 0, 1], [0, 2, 1], [2, 2, 1], [0, 0, 1]]
    }"#;

    #[test]
    fn fit_then_map_roundtrip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("corr.json");
        let out = dir.path().join("fits").join("h.json");
        fs::write(&input, SQUARE_TO_DOUBLE).unwrap();

        let t = fit(&input, &out, Some("unit")).unwrap();
        assert!(t
            .apply(&HomogeneousCoordinate::real(3.0, 1.0, 1.0))
            .approx_eq(&HomogeneousCoordinate::real(6.0, 2.0, 1.0), 1e-12));
        assert!(out.exists());
        assert!(dir.path().join("fits").join("h.provenance.json").exists());

        let mapped = map(&out, "[3, 1, 1]", false).unwrap();
        let [x, y] = mapped.position.unwrap();
        assert!((x - 6.0).abs() < 1e-12 && (y - 2.0).abs() < 1e-12);
        assert!(!mapped.at_infinity);

        let back = map(&out, "[6, 2, 1]", true).unwrap();
        let [x, y] = back.position.unwrap();
        assert!((x - 3.0).abs() < 1e-12 && (y - 1.0).abs() < 1e-12);

        let direction = map(&out, "[1, 0, 0]", false).unwrap();
        assert!(direction.at_infinity);
        assert!(direction.position.is_none());
    }

    #[test]
    fn fit_rejects_collinear_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("corr.json");
        fs::write(
            &input,
            r#"{"from": [[0,0,1],[1,1,1],[2,2,1],[0,1,1]], "to": [[1,0,1],[0,1,1],[1,1,1],[0,0,1]]}"#,
        )
        .unwrap();
        let err = fit(&input, &dir.path().join("h.json"), None).unwrap_err();
        assert!(err.to_string().contains("degenerate"));
    }

    #[test]
    fn map_rejects_bad_points() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("id.json");
        io::write_json(&out, &MatrixDoc::from(Transformation::identity().matrix())).unwrap();
        assert!(map(&out, "[0, 0, 0]", false).is_err());
        assert!(map(&out, "[1, 2]", false).is_err());
        assert!(map(&dir.path().join("missing.json"), "[1, 2, 3]", false).is_err());
    }

    #[test]
    fn trace_writes_circle_points() {
        let dir = tempdir().unwrap();
        let conic = dir.path().join("circle.json");
        fs::write(&conic, r#"{"squares": [1, 1, -1], "pair_products": [0, 0, 0]}"#).unwrap();
        let out = dir.path().join("circle.points.json");

        let count = trace(&conic, AxisArg::X, (-2.0, 2.0), 41, &out, None).unwrap();
        assert!(count > 0);
        let doc: TraceDoc = io::read_json(&out).unwrap();
        assert_eq!(doc.points.len(), count);
        assert_eq!(doc.axis, "x");
        for [x, y] in doc.points {
            assert!((x * x + y * y - 1.0).abs() < 1e-9);
        }
        assert!(dir.path().join("circle.points.provenance.json").exists());

        assert!(trace(&conic, AxisArg::Y, (0.0, 1.0), 0, &out, None).is_err());
    }

    #[test]
    fn report_carries_kernel_version() {
        let block = report(Some("t"));
        assert_eq!(block["kernel_version"], homogebra::VERSION);
        assert_eq!(block["tag"], "t");
    }
}
