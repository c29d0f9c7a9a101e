// ABOUTME: Criterion benchmarks for the assessment pipeline, comparator, and trend analysis
// ABOUTME: Measures single runs, sequential versus rayon batches, and service batch processing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! Criterion benchmarks for the body-composition engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use bodymetrics::repository::InMemoryRepository;
use bodymetrics::services::AssessmentService;
use bodymetrics_core::models::{BilateralMeasurement, BiologicalSex, MeasurementSet, SubjectProfile};
use bodymetrics_intelligence::{analyze_trend, compare, process_assessment, AnalysisConfig, Assessment};
use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rayon::prelude::*;
use std::sync::Arc;
use tokio::runtime::Runtime;

const BATCH_SIZES: [usize; 3] = [10, 100, 500];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn subject() -> SubjectProfile {
    SubjectProfile::new(
        "Bench",
        BiologicalSex::Male,
        NaiveDate::from_ymd_opt(1990, 3, 15).unwrap(),
        today(),
    )
    .unwrap()
}

/// Complete measurement set with small per-index variation
#[allow(clippy::cast_precision_loss)]
fn measurements(index: usize) -> MeasurementSet {
    let drift = (index % 40) as f64 * 0.1;
    MeasurementSet::new(178.0, 80.0 + drift)
        .unwrap()
        .with_neck(38.0)
        .with_shoulders(118.0 + drift)
        .with_chest(102.0 + drift)
        .with_waist(84.0 - drift / 2.0)
        .with_abdomen(86.0)
        .with_hip(98.0)
        .with_relaxed_arm(BilateralMeasurement::both(34.0, 34.5))
        .with_contracted_arm(BilateralMeasurement::both(37.0 + drift / 4.0, 37.5))
        .with_forearm(BilateralMeasurement::both(29.0, 29.5))
        .with_thigh(BilateralMeasurement::both(56.0, 57.0))
        .with_calf(BilateralMeasurement::both(37.0, 37.5))
        .with_frame_breadths(Some(41.0), Some(33.0))
        .with_wrist_breadth(BilateralMeasurement::both(5.8, 5.9))
        .with_ankle_breadth(BilateralMeasurement::both(7.2, 7.3))
}

fn unprocessed(subject: &SubjectProfile, count: usize) -> Vec<Assessment> {
    (0..count)
        .map(|index| {
            let date = today() - Days::new(7 * index as u64);
            Assessment::new(subject.id, date, measurements(index), today()).unwrap()
        })
        .collect()
}

fn processed(subject: &SubjectProfile, count: usize, config: &AnalysisConfig) -> Vec<Assessment> {
    unprocessed(subject, count)
        .into_iter()
        .map(|mut a| {
            a.process(subject, config).unwrap();
            a
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let subject = subject();
    let config = AnalysisConfig::default();

    group.bench_function("complete_set", |b| {
        let m = measurements(0);
        b.iter(|| process_assessment(black_box(&m), &subject, today(), &config));
    });

    group.bench_function("minimal_set", |b| {
        let m = MeasurementSet::new(178.0, 80.0).unwrap();
        b.iter(|| process_assessment(black_box(&m), &subject, today(), &config));
    });

    group.finish();
}

fn bench_batch_processing(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_processing");
    let subject = subject();
    let config = AnalysisConfig::default();

    for count in BATCH_SIZES {
        let batch: Vec<MeasurementSet> = (0..count).map(measurements).collect();
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("sequential", count), &batch, |b, batch| {
            b.iter(|| {
                batch
                    .iter()
                    .map(|m| process_assessment(m, &subject, today(), &config))
                    .collect::<Vec<_>>()
            });
        });

        group.bench_with_input(BenchmarkId::new("rayon", count), &batch, |b, batch| {
            b.iter(|| {
                batch
                    .par_iter()
                    .map(|m| process_assessment(m, &subject, today(), &config))
                    .collect::<Vec<_>>()
            });
        });
    }

    group.finish();
}

fn bench_comparator(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparator");
    let subject = subject();
    let config = AnalysisConfig::default();

    let pair = processed(&subject, 2, &config);
    group.bench_function("compare_pair", |b| {
        b.iter(|| compare(black_box(&pair[1]), black_box(&pair[0]), &config));
    });

    for count in BATCH_SIZES {
        let history = processed(&subject, count, &config);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("trend", count), &history, |b, history| {
            b.iter(|| analyze_trend(black_box(history), &config));
        });
    }

    group.finish();
}

fn bench_service_process_pending(c: &mut Criterion) {
    let mut group = c.benchmark_group("service");
    let runtime = Runtime::new().unwrap();
    let subject = subject();

    group.throughput(Throughput::Elements(100));
    group.bench_function("process_pending_100", |b| {
        b.to_async(&runtime).iter(|| {
            let subject = subject.clone();
            async move {
                let service = AssessmentService::new(
                    Arc::new(InMemoryRepository::new()),
                    AnalysisConfig::default(),
                );
                let subject_id = service
                    .register_subject(subject.clone(), today())
                    .await
                    .unwrap();
                for assessment in unprocessed(&subject, 100) {
                    service.import_assessment(assessment, today()).await.unwrap();
                }
                service.process_pending(subject_id).await.unwrap()
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_pipeline,
    bench_batch_processing,
    bench_comparator,
    bench_service_process_pending
);
criterion_main!(benches);
