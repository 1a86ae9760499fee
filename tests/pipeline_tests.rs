use rastercat::engine::crs::CrsParser;
use rastercat::engine::raster::FileRasterReader;
use rastercat::engine::{DefaultCrsParser, FileProcessor, RasterReader, read_catalogue};
use rastercat::error::{CrsParseError, DiscoveryError, ProcessingError, RasterError};
use rastercat::pipeline::{
    BatchIds, BatchScheduler, DiscoverOpts, SkipPolicy, discover, progress_log, spawn_observer,
};
use rastercat::{Coord, GeoTransform, Opts, RasterInfo, RasterRecord};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tiff::encoder::{TiffEncoder, colortype};
use tiff::tags::Tag;

/// GeoKey directory declaring a projected model with `RasterPixelIsPoint`.
const PIXEL_IS_POINT_KEYS: [u16; 12] = [1, 1, 0, 2, 1024, 0, 1, 1, 1025, 0, 1, 2];
/// Same directory with `RasterPixelIsArea`.
const PIXEL_IS_AREA_KEYS: [u16; 12] = [1, 1, 0, 2, 1024, 0, 1, 1, 1025, 0, 1, 1];

/// Write a small north-up GeoTIFF whose top-left tiepoint sits at (`x`, `y`) with 1-unit pixels.
fn write_geotiff(path: &Path, width: u32, height: u32, x: f64, y: f64) {
    write_geotiff_with_keys(path, width, height, x, y, None);
}

fn write_geotiff_with_keys(
    path: &Path,
    width: u32,
    height: u32,
    x: f64,
    y: f64,
    geokeys: Option<&[u16]>,
) {
    let file = BufWriter::new(File::create(path).unwrap());
    let mut encoder = TiffEncoder::new(file).unwrap();
    let mut image = encoder
        .new_image::<colortype::Gray8>(width, height)
        .unwrap();
    image
        .encoder()
        .write_tag(Tag::ModelPixelScaleTag, &[1.0f64, 1.0, 0.0][..])
        .unwrap();
    image
        .encoder()
        .write_tag(Tag::ModelTiepointTag, &[0.0f64, 0.0, 0.0, x, y, 0.0][..])
        .unwrap();
    if let Some(keys) = geokeys {
        image
            .encoder()
            .write_tag(Tag::GeoKeyDirectoryTag, keys)
            .unwrap();
    }
    let pixels = vec![0u8; (width * height) as usize];
    image.write_data(&pixels).unwrap();
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}

fn exts() -> Vec<String> {
    vec![".tif".to_string(), ".png".to_string()]
}

// --- discovery ---

#[test]
fn test_discovery_prunes_skipped_subtrees() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    for rel in [
        "admin/a.tif",
        "sub/ARCHIVING/b.tif",
        "sub/ARCHIVING/deeper/b2.tif",
        "00000_old/c.tif",
        "sub/d.TIF",
        "e.png",
        "notes.txt",
        "sub/f.tiff",
    ] {
        touch(&root.join(rel));
    }
    let (log, drain) = progress_log();
    let files = discover(
        root,
        &SkipPolicy::default(),
        &exts(),
        &DiscoverOpts::default(),
        &log,
    )
    .unwrap();

    assert_eq!(files, vec![root.join("e.png"), root.join("sub/d.TIF")]);
    let policy = SkipPolicy::default();
    for f in &files {
        let rel = f.strip_prefix(root).unwrap();
        assert!(
            rel.components()
                .all(|c| !policy.should_skip(&c.as_os_str().to_string_lossy())),
            "{} is under a skipped folder",
            f.display()
        );
    }

    let lines = drain.drain_all();
    assert!(lines.contains(&format!("Discovered folder with files: {}", root.display())));
    assert!(!lines.iter().any(|l| l.contains("ARCHIVING") || l.contains("admin")));
}

#[test]
fn test_discovery_reports_empty_folders() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();
    touch(&dir.path().join("empty/readme.md"));
    let (log, drain) = progress_log();
    let files = discover(
        dir.path(),
        &SkipPolicy::default(),
        &exts(),
        &DiscoverOpts::default(),
        &log,
    )
    .unwrap();
    assert!(files.is_empty());
    let lines = drain.drain_all();
    assert!(lines.contains(&format!(
        "No relevant files found in folder: {}",
        dir.path().join("empty").display()
    )));
}

#[test]
fn test_skipped_root_still_walks_children() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("Admin");
    touch(&root.join("top.tif"));
    touch(&root.join("child/inner.tif"));
    touch(&root.join("archiving/hidden.tif"));

    let (log, drain) = progress_log();
    let files = discover(
        &root,
        &SkipPolicy::default(),
        &exts(),
        &DiscoverOpts::default(),
        &log,
    )
    .unwrap();
    assert_eq!(files, vec![root.join("child/inner.tif")]);
    assert_eq!(
        drain.drain_all()[0],
        format!("Skipping folder and subfolders: {}", root.display())
    );
}

#[test]
fn test_discovery_without_subfolders_and_custom_keywords() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("a.png"));
    touch(&dir.path().join("b.PNG"));
    touch(&dir.path().join("old/c.png"));
    touch(&dir.path().join("admin/d.png"));
    let (log, _drain) = progress_log();

    let shallow = DiscoverOpts {
        include_subfolders: false,
        ..Default::default()
    };
    let files = discover(dir.path(), &SkipPolicy::default(), &exts(), &shallow, &log).unwrap();
    assert_eq!(files, vec![dir.path().join("a.png"), dir.path().join("b.PNG")]);

    let files = discover(
        dir.path(),
        &SkipPolicy::new(["OLD"]),
        &exts(),
        &DiscoverOpts::default(),
        &log,
    )
    .unwrap();
    assert_eq!(
        files,
        vec![
            dir.path().join("a.png"),
            dir.path().join("b.PNG"),
            dir.path().join("admin/d.png"),
        ]
    );
}

#[test]
fn test_discovery_missing_root() {
    let (log, _drain) = progress_log();
    let err = discover(
        Path::new("/definitely/not/here"),
        &SkipPolicy::default(),
        &exts(),
        &DiscoverOpts::default(),
        &log,
    )
    .unwrap_err();
    assert!(matches!(err, DiscoveryError::NotADirectory { .. }));
}

#[cfg(unix)]
#[test]
fn test_unreadable_folder_reported_once() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("a.tif"));
    touch(&dir.path().join("locked/b.tif"));
    let locked = dir.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&locked).is_ok() {
        // Privileged user: permissions are not enforced.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let (log, drain) = progress_log();
    let lenient = DiscoverOpts {
        strict: false,
        ..Default::default()
    };
    let files = discover(dir.path(), &SkipPolicy::default(), &exts(), &lenient, &log).unwrap();
    let strict = discover(
        dir.path(),
        &SkipPolicy::default(),
        &exts(),
        &DiscoverOpts::default(),
        &log,
    );
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(files, vec![dir.path().join("a.tif")]);
    let lines = drain.drain_all();
    let prefix = format!("Cannot read folder {}: ", locked.display());
    assert_eq!(lines.iter().filter(|l| l.starts_with(&prefix)).count(), 1);
    assert!(matches!(strict, Err(DiscoveryError::Unreadable { .. })));
}

// --- raster reader ---

#[test]
fn test_reader_rejects_unknown_and_garbage() {
    let err = FileRasterReader.open(Path::new("scan.jpg")).unwrap_err();
    assert!(matches!(err, RasterError::Unsupported { .. }));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.tif");
    fs::write(&path, b"definitely not a tiff").unwrap();
    assert!(matches!(
        FileRasterReader.open(&path),
        Err(RasterError::Unsupported { .. })
    ));
}

#[test]
fn test_pixel_is_point_shifted_to_corner() {
    let dir = tempfile::tempdir().unwrap();
    let point = dir.path().join("point.tif");
    let area = dir.path().join("area.tif");
    let plain = dir.path().join("plain.tif");
    write_geotiff_with_keys(&point, 4, 4, 1000.0, 2000.0, Some(&PIXEL_IS_POINT_KEYS));
    write_geotiff_with_keys(&area, 4, 4, 1000.0, 2000.0, Some(&PIXEL_IS_AREA_KEYS));
    write_geotiff(&plain, 4, 4, 1000.0, 2000.0);

    let info = FileRasterReader.open(&point).unwrap();
    assert_eq!(
        info.geotransform,
        Some(GeoTransform([999.5, 1.0, 0.0, 2000.5, 0.0, -1.0]))
    );
    let unshifted = Some(GeoTransform([1000.0, 1.0, 0.0, 2000.0, 0.0, -1.0]));
    assert_eq!(FileRasterReader.open(&area).unwrap().geotransform, unshifted);
    assert_eq!(FileRasterReader.open(&plain).unwrap().geotransform, unshifted);

    let processor: FileProcessor = FileProcessor::default();
    let record = processor.process(&point).unwrap();
    assert_eq!(
        (record.minx, record.miny, record.maxx, record.maxy),
        (999.5, 1996.5, 1003.5, 2000.5)
    );
}

// --- png + world file ---

#[test]
fn test_png_footprint_from_world_file() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("sheet.png");
    image::GrayImage::new(4, 3).save(&png).unwrap();
    let processor: FileProcessor = FileProcessor::default();

    // No world file yet: no transform to work from.
    let (log, drain) = progress_log();
    assert!(processor.process_logged(&png, &log).is_none());
    assert_eq!(drain.drain_all().len(), 1);

    fs::write(dir.path().join("sheet.pgw"), "2.0\n0.0\n0.0\n-2.0\n101.0\n199.0\n").unwrap();
    let record = processor.process(&png).unwrap();
    assert_eq!(record.filename, "sheet.png");
    assert_eq!(
        (record.minx, record.miny, record.maxx, record.maxy),
        (100.0, 194.0, 108.0, 200.0)
    );
    assert_eq!(record.crs, "N/A");
}

// --- processor ---

struct FixedReader(Option<GeoTransform>);

impl RasterReader for FixedReader {
    fn open(&self, path: &Path) -> Result<RasterInfo, RasterError> {
        let name = path.to_string_lossy();
        if name.contains("boom") {
            panic!("decoder exploded");
        }
        if name.contains("corrupt") {
            return Err(RasterError::Unsupported {
                reason: "not a raster".into(),
            });
        }
        Ok(RasterInfo {
            width: 10,
            height: 20,
            geotransform: self.0,
        })
    }
}

struct FailingParser;

impl CrsParser for FailingParser {
    fn parse(&self, _text: &str) -> Result<String, CrsParseError> {
        Err(CrsParseError::MalformedWkt("nope".into()))
    }
}

fn georeferenced() -> FixedReader {
    FixedReader(Some(GeoTransform([1000.0, 1.0, 0.0, 2000.0, 0.0, -1.0])))
}

#[test]
fn test_record_without_sidecar_has_na_crs() {
    let p = FileProcessor::new(georeferenced(), DefaultCrsParser);
    let record = p.process(Path::new("/nowhere/tile.tif")).unwrap();
    assert_eq!(record.crs, "N/A");
    assert_eq!((record.minx, record.miny), (1000.0, 1980.0));
    assert_eq!((record.maxx, record.maxy), (1010.0, 2000.0));
}

#[test]
fn test_sidecar_crs_resolved_or_kept_as_error_text() {
    let dir = tempfile::tempdir().unwrap();
    let tif = dir.path().join("tile.tif");
    fs::write(dir.path().join("tile.prj"), "EPSG:27700\n").unwrap();
    let p = FileProcessor::new(georeferenced(), DefaultCrsParser);
    assert_eq!(p.process(&tif).unwrap().crs, "EPSG:27700");

    let p = FileProcessor::new(georeferenced(), FailingParser);
    let record = p.process(&tif).unwrap();
    assert!(record.crs.starts_with("ERROR parsing CRS: "));
}

#[test]
fn test_zero_origin_rejected() {
    let p = FileProcessor::new(
        FixedReader(Some(GeoTransform([0.0, 1.0, 0.0, 0.0, 0.0, 1.0]))),
        DefaultCrsParser,
    );
    assert!(matches!(
        p.process(Path::new("flat.png")),
        Err(ProcessingError::NonGeoreferenced { .. })
    ));
}

#[test]
fn test_processing_failures_log_once_and_yield_none() {
    let (log, drain) = progress_log();
    let p = FileProcessor::new(FixedReader(None), DefaultCrsParser);
    assert!(p.process_logged(Path::new("a.tif"), &log).is_none());
    let p = FileProcessor::new(georeferenced(), DefaultCrsParser);
    assert!(p.process_logged(Path::new("corrupt.tif"), &log).is_none());
    assert!(p.process_logged(Path::new("boom.tif"), &log).is_none());
    let lines = drain.drain_all();
    assert_eq!(
        lines,
        vec![
            "Error processing a.tif: No geotransformation available.".to_string(),
            "Error processing corrupt.tif: Unsupported file format for corrupt.tif: not a raster"
                .to_string(),
            "Error processing boom.tif: Processing panicked: decoder exploded".to_string(),
        ]
    );
}

#[test]
fn test_panicking_file_does_not_stop_the_run() {
    let files: Vec<PathBuf> = ["a.tif", "boom.tif", "b.tif", "c.tif"]
        .iter()
        .map(PathBuf::from)
        .collect();
    let (log, drain) = progress_log();
    let p = FileProcessor::new(georeferenced(), DefaultCrsParser);

    let mut sizes = Vec::new();
    let stats = BatchScheduler::new(3, 2)
        .run(
            &files,
            |path| p.process_logged(path, &log),
            |records, _| sizes.push(records.len()),
        )
        .unwrap();
    assert_eq!(stats.completed, 4);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.flushes, 2);
    assert_eq!(sizes.iter().sum::<usize>(), 3);
    let lines = drain.drain_all();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Error processing boom.tif: Processing panicked"));
}

// --- progress log ---

#[test]
fn test_drain_all_is_fifo_and_empties() {
    let (log, drain) = progress_log();
    log.emit("one");
    log.emit(String::from("two"));
    assert_eq!(drain.drain_all(), vec!["one", "two"]);
    assert!(drain.drain_all().is_empty());
}

#[test]
fn test_observer_sees_everything_before_exit() {
    let (log, drain) = progress_log();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let handle = spawn_observer(drain, Duration::from_millis(5), move |m: &str| {
        sink.lock().unwrap().push(m.to_string())
    });

    let producers: Vec<_> = (0..4)
        .map(|p| {
            let log = log.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    log.emit(format!("{p}:{i}"));
                }
            })
        })
        .collect();
    for h in producers {
        h.join().unwrap();
    }
    drop(log);
    handle.join().unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 200);
    // Per-producer order survives interleaving.
    for p in 0..4 {
        let mine: Vec<usize> = seen
            .iter()
            .filter_map(|m| m.strip_prefix(&format!("{p}:")))
            .map(|i| i.parse().unwrap())
            .collect();
        assert_eq!(mine, (0..50).collect::<Vec<_>>());
    }
}

// --- scheduler ---

fn stub_record(path: &Path) -> RasterRecord {
    let c = [
        Coord::new(1.0, 1.0),
        Coord::new(1.0, 2.0),
        Coord::new(2.0, 2.0),
        Coord::new(2.0, 1.0),
    ];
    RasterRecord::new(path, c, "N/A".to_string())
}

fn stub_paths(n: usize) -> Vec<PathBuf> {
    (0..n).map(|i| PathBuf::from(format!("f{i}.tif"))).collect()
}

#[test]
fn test_batch_ids_unique() {
    let mut ids = BatchIds::new();
    let drawn: HashSet<String> = (0..500).map(|_| ids.next_id().to_string()).collect();
    assert_eq!(drawn.len(), 500);
    assert!(drawn.iter().all(|id| id.len() == 8));
}

#[test]
fn test_flush_count_is_ceil_of_files_over_batch() {
    for (n, b, expected) in [(0, 3, 0), (1, 3, 1), (3, 3, 1), (7, 3, 3), (10, 1, 10)] {
        let mut sizes = Vec::new();
        let stats = BatchScheduler::new(b, 4)
            .run(
                &stub_paths(n),
                |p| Some(stub_record(p)),
                |recs, _| sizes.push(recs.len()),
            )
            .unwrap();
        assert_eq!(stats.flushes, expected, "n={n} b={b}");
        assert_eq!(sizes.len(), expected);
        assert_eq!(sizes.iter().sum::<usize>(), n);
    }
}

#[test]
fn test_failures_trigger_but_are_excluded() {
    let mut sizes = Vec::new();
    let stats = BatchScheduler::new(2, 2)
        .run(
            &stub_paths(4),
            |p| (p != Path::new("f0.tif")).then(|| stub_record(p)),
            |recs, _| sizes.push(recs.len()),
        )
        .unwrap();
    assert_eq!(stats.flushes, 2);
    assert_eq!(stats.failed, 1);
    assert_eq!(sizes.iter().sum::<usize>(), 3);
}

#[test]
fn test_cancel_before_start_skips_everything() {
    let cancel = Arc::new(AtomicBool::new(true));
    let mut calls = 0;
    let stats = BatchScheduler::new(2, 2)
        .with_cancel(cancel)
        .run(&stub_paths(5), |p| Some(stub_record(p)), |_, _| calls += 1)
        .unwrap();
    assert_eq!(stats.completed, 0);
    assert_eq!(calls, 0);
    assert!(stats.cancelled);
}

#[test]
fn test_each_record_in_exactly_one_flush() {
    let dir = tempfile::tempdir().unwrap();
    let files: Vec<PathBuf> = (0..23)
        .map(|i| {
            let p = dir.path().join(format!("t{i:02}.tif"));
            write_geotiff(&p, 4, 4, 1000.0 + i as f64, 2000.0);
            p
        })
        .collect();
    let (log, drain) = progress_log();
    let processor: FileProcessor = FileProcessor::default();

    let mut batches: Vec<Vec<RasterRecord>> = Vec::new();
    let mut ids = HashSet::new();
    let stats = BatchScheduler::new(5, 4)
        .run(
            &files,
            |p| processor.process_logged(p, &log),
            |records, id| {
                assert!(ids.insert(id.to_string()), "batch id reused");
                batches.push(records);
            },
        )
        .unwrap();

    assert_eq!(stats.flushes, 5);
    assert_eq!(batches.len(), 5);
    assert!(batches[..4].iter().all(|b| b.len() == 5));
    let names: Vec<String> = batches.iter().flatten().map(|r| r.filename.clone()).collect();
    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(names.len(), 23);
    assert_eq!(unique.len(), 23);
    assert!(drain.drain_all().is_empty());
}

#[test]
fn test_one_log_line_per_failing_file() {
    let dir = tempfile::tempdir().unwrap();
    let files: Vec<PathBuf> = (0..5)
        .map(|i| {
            let p = dir.path().join(format!("bad{i}.tif"));
            fs::write(&p, b"not a tiff").unwrap();
            p
        })
        .collect();
    let (log, drain) = progress_log();
    let processor: FileProcessor = FileProcessor::default();

    let mut sizes = Vec::new();
    let stats = BatchScheduler::new(2, 3)
        .run(
            &files,
            |p| processor.process_logged(p, &log),
            |records, _| sizes.push(records.len()),
        )
        .unwrap();

    assert_eq!(stats.failed, 5);
    assert_eq!(stats.flushes, 3);
    assert_eq!(sizes, vec![0, 0, 0]);
    let lines = drain.drain_all();
    assert_eq!(lines.len(), 5);
    for f in &files {
        let prefix = format!("Error processing {}: ", f.display());
        assert_eq!(lines.iter().filter(|l| l.starts_with(&prefix)).count(), 1);
    }
}

// --- end to end ---

#[test]
fn test_three_valid_one_corrupt_batch_of_two() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(data.join("sheets")).unwrap();
    write_geotiff(&data.join("a.tif"), 100, 200, 500000.0, 1300000.0);
    write_geotiff(&data.join("sheets/b.tif"), 10, 10, 400000.0, 200000.0);
    write_geotiff(&data.join("sheets/c.tif"), 10, 10, 400010.0, 200000.0);
    fs::write(data.join("sheets/c.prj"), "EPSG:27700\n").unwrap();
    fs::write(data.join("sheets/corrupt.tif"), b"\x00\x01garbage").unwrap();

    let opts = Opts {
        output_base: dir.path().join("out/catalogue"),
        batch_size: 2,
        num_threads: Some(2),
        ..Default::default()
    };
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&lines);
    let summary = rastercat::catalogue_dir(&data, &opts, move |m: &str| {
        sink.lock().unwrap().push(m.to_string())
    })
    .unwrap();

    assert_eq!(summary.discovered, 4);
    assert_eq!(summary.processed, 3);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.flushes, 2);
    assert_eq!(summary.written.len(), 2);
    assert!(!summary.cancelled);

    let mut records: Vec<RasterRecord> = summary
        .written
        .iter()
        .flat_map(|p| read_catalogue(p).unwrap())
        .collect();
    records.sort_by(|a, b| a.filename.cmp(&b.filename));
    let names: Vec<&str> = records.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, vec!["a.tif", "b.tif", "c.tif"]);
    assert_eq!(
        (records[0].minx, records[0].miny, records[0].maxx, records[0].maxy),
        (500000.0, 1299800.0, 500100.0, 1300000.0)
    );
    assert_eq!(records[0].crs, "N/A");
    assert_eq!(records[2].crs, "EPSG:27700");

    let lines = lines.lock().unwrap();
    let errors: Vec<&String> = lines
        .iter()
        .filter(|l| l.starts_with("Error processing"))
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("corrupt.tif"));
    assert_eq!(lines.first().map(String::as_str), Some("Starting discovery..."));
    assert!(lines.contains(&"Discovered 4 files.".to_string()));
    assert_eq!(lines.iter().filter(|l| l.starts_with("Saved results to ")).count(), 2);
    assert_eq!(lines.last().map(String::as_str), Some("Processing complete!"));
}

#[test]
fn test_empty_tree_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    let opts = Opts {
        output_base: dir.path().join("out/catalogue"),
        ..Default::default()
    };
    let summary = rastercat::catalogue_dir(&data, &opts, |_: &str| {}).unwrap();
    assert_eq!(summary.discovered, 0);
    assert_eq!(summary.flushes, 0);
    assert!(summary.written.is_empty());
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_missing_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let opts = Opts {
        output_base: dir.path().join("cat"),
        ..Default::default()
    };
    assert!(rastercat::catalogue_dir(&dir.path().join("nope"), &opts, |_: &str| {}).is_err());
}
