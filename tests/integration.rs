#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use image::{ImageBuffer, Rgb, RgbImage};
    use std::io::Read;
    use std::path::{Path, PathBuf};

    use webpdrop::{
        convert_file, BundleWriter, ConversionResult, ConvertError, EncodeQuality, FileIntake,
        ResultStore,
    };

    fn gradient(width: u32, height: u32) -> RgbImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([
                ((x * 7) % 256) as u8,
                ((y * 5) % 256) as u8,
                (((x + y) * 3) % 256) as u8,
            ])
        })
    }

    fn write_sample(dir: &TempDir, name: &str) -> PathBuf {
        let child = dir.child(name);
        gradient(64, 48).save(child.path()).unwrap();
        child.path().to_path_buf()
    }

    fn is_webp(data: &[u8]) -> bool {
        data.len() > 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP"
    }

    fn convert_into_store(intake: &FileIntake, store: &mut ResultStore, path: &Path) {
        let job = intake.screen(path, store).unwrap();
        let result = convert_file(&job, EncodeQuality::Fidelity).unwrap();
        store.insert(result);
    }

    #[test]
    fn converts_each_supported_raster_type() {
        let temp_dir = TempDir::new().unwrap();
        let intake = FileIntake::new();
        let mut store = ResultStore::new();

        for name in ["a.jpg", "b.png", "c.gif", "d.bmp"] {
            let path = write_sample(&temp_dir, name);
            convert_into_store(&intake, &mut store, &path);
        }

        assert_eq!(store.len(), 4);
        for name in ["a.webp", "b.webp", "c.webp", "d.webp"] {
            let entry = store.get(name).unwrap();
            assert!(is_webp(&entry.data));
            assert!(entry.original_size > 0);
            assert_eq!(entry.converted_size, entry.data.len() as u64);
        }
    }

    #[test]
    fn intake_accepts_avif_by_media_type() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.child("modern.avif");
        child.write_binary(b"not a real avif").unwrap();

        let intake = FileIntake::new();
        let store = ResultStore::new();
        let job = intake.screen(child.path(), &store).unwrap();
        assert_eq!(job.output_name, "modern.webp");
    }

    #[test]
    fn unsupported_types_are_screened_out() {
        let temp_dir = TempDir::new().unwrap();
        let intake = FileIntake::new();
        let store = ResultStore::new();

        for name in ["notes.txt", "vector.svg", "already.webp", "photo.tiff"] {
            let child = temp_dir.child(name);
            child.write_binary(b"irrelevant").unwrap();
            let err = intake.screen(child.path(), &store).unwrap_err();
            assert!(matches!(err, ConvertError::UnsupportedType(_)), "{}", name);
        }
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_image_never_produces_a_result() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.child("broken.png");
        child.write_binary(b"\x89PNG but not really").unwrap();

        let intake = FileIntake::new();
        let store = ResultStore::new();
        let job = intake.screen(child.path(), &store).unwrap();
        let err = convert_file(&job, EncodeQuality::Fidelity).unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)));
    }

    #[test]
    fn duplicate_output_names_are_rejected_before_conversion() {
        let temp_dir = TempDir::new().unwrap();
        let intake = FileIntake::new();
        let mut store = ResultStore::new();

        let first = write_sample(&temp_dir, "a.jpg");
        convert_into_store(&intake, &mut store, &first);

        let second = write_sample(&temp_dir, "a.png");
        let err = intake
            .screen(&second, &store)
            .unwrap_err();
        assert!(matches!(err, ConvertError::DuplicateName(name) if name == "a.webp"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn concurrent_duplicates_resolve_last_writer_wins() {
        let mut store = ResultStore::new();
        let result = |name: &str, data: Vec<u8>| ConversionResult {
            output_name: name.to_string(),
            original_size: 10,
            converted_size: data.len() as u64,
            data,
        };

        store.insert(result("z.webp", vec![9]));
        store.insert(result("a.webp", vec![1]));
        store.insert(result("a.webp", vec![2, 3]));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a.webp").unwrap().data, vec![2, 3]);
        // The overwritten entry keeps its original position.
        let names: Vec<&String> = store.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["z.webp", "a.webp"]);
    }

    #[test]
    fn bundling_an_empty_store_is_a_noop() {
        let store = ResultStore::new();
        assert!(BundleWriter::new().bundle(&store).unwrap().is_none());
    }

    #[test]
    fn bundle_holds_every_result_byte_identical() {
        let temp_dir = TempDir::new().unwrap();
        let intake = FileIntake::new();
        let mut store = ResultStore::new();

        for name in ["first.png", "second.jpg", "third.bmp"] {
            let path = write_sample(&temp_dir, name);
            convert_into_store(&intake, &mut store, &path);
        }

        let bytes = BundleWriter::new().bundle(&store).unwrap().unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), store.len());

        for (index, (name, entry)) in store.iter().enumerate() {
            let mut file = archive.by_index(index).unwrap();
            assert_eq!(file.name(), name);
            let mut contents = Vec::new();
            file.read_to_end(&mut contents).unwrap();
            assert_eq!(contents, entry.data);
        }
    }

    #[test]
    fn removing_the_last_result_disables_bundling() {
        let temp_dir = TempDir::new().unwrap();
        let intake = FileIntake::new();
        let mut store = ResultStore::new();

        for name in ["keep.png", "drop.jpg"] {
            let path = write_sample(&temp_dir, name);
            convert_into_store(&intake, &mut store, &path);
        }

        assert!(store.remove("drop.webp").is_some());
        assert_eq!(store.len(), 1);
        assert!(BundleWriter::new().bundle(&store).unwrap().is_some());

        assert!(store.remove("keep.webp").is_some());
        assert!(store.is_empty());
        assert!(BundleWriter::new().bundle(&store).unwrap().is_none());
    }

    #[test]
    fn optimize_toggle_changes_size_but_not_name() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.child("photo.png");
        gradient(128, 128).save(child.path()).unwrap();

        let intake = FileIntake::new();
        let store = ResultStore::new();
        let job = intake.screen(child.path(), &store).unwrap();

        let fidelity = convert_file(&job, EncodeQuality::Fidelity).unwrap();
        let optimized = convert_file(&job, EncodeQuality::Optimized).unwrap();

        assert_eq!(fidelity.output_name, "photo.webp");
        assert_eq!(optimized.output_name, "photo.webp");
        assert!(is_webp(&fidelity.data));
        assert!(is_webp(&optimized.data));
        assert!(
            optimized.converted_size < fidelity.converted_size,
            "quality 80 should encode smaller than quality 95 ({} vs {})",
            optimized.converted_size,
            fidelity.converted_size
        );
    }

    #[test]
    fn mixed_case_extensions_map_to_lowercase_webp() {
        let temp_dir = TempDir::new().unwrap();
        let intake = FileIntake::new();
        let mut store = ResultStore::new();

        let path = write_sample(&temp_dir, "photo.JPG");
        convert_into_store(&intake, &mut store, &path);

        assert!(store.get("photo.webp").is_some());
    }

    #[test]
    fn directories_expand_recursively() {
        let temp_dir = TempDir::new().unwrap();
        temp_dir.child("nested/deeper").create_dir_all().unwrap();
        write_sample(&temp_dir, "top.png");
        write_sample(&temp_dir, "nested/mid.jpg");
        write_sample(&temp_dir, "nested/deeper/leaf.bmp");
        temp_dir.child("nested/readme.txt").write_str("skip me").unwrap();

        let intake = FileIntake::new();
        let mut store = ResultStore::new();
        for path in intake.expand(&[temp_dir.path().to_path_buf()]) {
            match intake.screen(&path, &store) {
                Ok(job) => {
                    let result = convert_file(&job, EncodeQuality::Optimized).unwrap();
                    store.insert(result);
                }
                Err(err) => assert!(matches!(err, ConvertError::UnsupportedType(_))),
            }
        }

        assert_eq!(store.len(), 3);
        for name in ["top.webp", "mid.webp", "leaf.webp"] {
            assert!(store.get(name).is_some(), "{}", name);
        }
    }
}
