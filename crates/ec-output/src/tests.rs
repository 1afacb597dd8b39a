//! Tests for ec-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, OCCUPANCY_HEADER, RELOCATION_HEADER};
    use crate::row::{OccupancyRow, RelocationRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn reloc_row(device_id: u32, time: f64) -> RelocationRow {
        RelocationRow {
            time,
            device_id,
            from_place:   0,
            to_place:     1,
            dwell:        2.5,
            next_move_at: time + 2.5,
        }
    }

    #[test]
    fn csv_files_created_in_new_dir() {
        let dir = tmp();
        let out = dir.path().join("nested/out");
        let _w = CsvWriter::new(&out).unwrap();
        assert!(out.join("relocations.csv").exists());
        assert!(out.join("occupancy.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("relocations.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, RELOCATION_HEADER);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("occupancy.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, OCCUPANCY_HEADER);
        assert_eq!(headers2, ["time", "place_id", "device_count"]);
    }

    #[test]
    fn relocation_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_relocations(&[reloc_row(0, 1.0), reloc_row(3, 4.0)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("relocations.csv")).unwrap();
        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][1], "3");
        assert_eq!(&records[1][5], "6.5");
    }

    #[test]
    fn occupancy_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = [
            OccupancyRow { time: 0.0, place_id: 7, device_count: 2 },
            OccupancyRow { time: 0.0, place_id: 8, device_count: 1 },
            OccupancyRow { time: 0.0004, place_id: 7, device_count: 3 },
        ];
        w.write_occupancy(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("occupancy.csv")).unwrap();
        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(&records[0][1], "7");
        assert_eq!(&records[1][2], "1");
        assert_eq!(&records[2][0], "0.0004");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use std::sync::Arc;

    use ec_catalog::PlaceCatalogBuilder;
    use ec_core::{AttractivenessClass, PlaceId, SimConfig, SimTime};
    use ec_sim::SimBuilder;

    use crate::row::{OccupancyRow, RelocationRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult, TraceObserver};

    /// In-memory writer that records everything.
    #[derive(Default)]
    struct MemWriter {
        relocations: Vec<RelocationRow>,
        occupancy:   Vec<OccupancyRow>,
        finished:    usize,
        fail:        bool,
    }

    impl OutputWriter for MemWriter {
        fn write_relocations(&mut self, rows: &[RelocationRow]) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.relocations.extend_from_slice(rows);
            Ok(())
        }

        fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()> {
            self.occupancy.extend_from_slice(rows);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    fn catalog() -> Arc<ec_catalog::PlaceCatalog> {
        let c = AttractivenessClass;
        Arc::new(
            PlaceCatalogBuilder::new()
                .place(PlaceId(10), c(0))
                .place(PlaceId(20), c(1))
                .place(PlaceId(30), c(1))
                .mean_dwell(c(0), 15.0)
                .mean_dwell(c(1), 5.0)
                .build()
                .unwrap(),
        )
    }

    fn config() -> SimConfig {
        let mut config = SimConfig::new(6, 3, SimTime(200.0));
        config.snapshot_interval = Some(50.0);
        config
    }

    #[test]
    fn observer_writes_trace_and_snapshots() {
        let mut sim = SimBuilder::new(config()).build(catalog()).unwrap();
        let mut obs = TraceObserver::new(MemWriter::default());
        let summary = sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.relocations.len() as u64, summary.relocations);
        assert_eq!(w.finished, 1);
        assert!(w.relocations.iter().all(|r| r.from_place != r.to_place));

        // Snapshots at 0, 50, 100, 150, 200, one row per place each.
        assert_eq!(w.occupancy.len(), 5 * 3);
        for chunk in w.occupancy.chunks(3) {
            let ids: Vec<u32> = chunk.iter().map(|r| r.place_id).collect();
            assert_eq!(ids, vec![10, 20, 30]);
            assert_eq!(chunk.iter().map(|r| r.device_count).sum::<u32>(), 6);
        }
        assert_eq!(w.occupancy[3].time, 50.0);
    }

    #[test]
    fn sub_millisecond_snapshots_stay_distinct() {
        let mut config = SimConfig::new(6, 3, SimTime(0.002));
        config.snapshot_interval = Some(0.0005);
        let mut sim = SimBuilder::new(config).build(catalog()).unwrap();
        let mut obs = TraceObserver::new(MemWriter::default());
        sim.run(&mut obs).unwrap();

        let w = obs.into_writer();
        let times: Vec<f64> = w.occupancy.chunks(3).map(|chunk| chunk[0].time).collect();
        assert_eq!(times.len(), 5);
        assert!(times.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(times[1], 0.0005);
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = SimBuilder::new(config()).build(catalog()).unwrap();
        let mut obs = TraceObserver::new(MemWriter { fail: true, ..MemWriter::default() });
        sim.run(&mut obs).unwrap();
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn end_to_end_csv() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = SimBuilder::new(config()).build(catalog()).unwrap();
        let mut obs = TraceObserver::new(CsvWriter::new(dir.path()).unwrap());
        let summary = sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("relocations.csv")).unwrap();
        assert_eq!(rdr.records().count() as u64, summary.relocations);
    }
}
