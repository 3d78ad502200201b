#![forbid(unsafe_code)]

//! Scripted end-to-end runs of each sample through the host loop.

use pretty_assertions::assert_eq;
use tether_runtime::reactive::Bounds;
use tether_samples::host;
use tether_samples::samples::{self, BindingSample, ListSample, TriangleSample, VirtualListSample};
use tether_samples::{Sample, SampleKind, SampleOptions};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("tether=trace")
        .try_init();
}

fn transcript<S: Sample + ?Sized>(sample: &mut S, script: &str) -> (usize, String) {
    init_tracing();
    let mut out = Vec::new();
    let handled = host::run(sample, script.as_bytes(), &mut out).expect("in-memory io");
    (handled, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn binding_script_transcript() {
    let mut sample = BindingSample::new(Bounds::new(0, 100), 50);
    let (handled, out) = transcript(&mut sample, "drag 70\nclear\ntype 150\nenter\nblur\nreset\n");
    assert_eq!(handled, 6);
    let expected = "\
0 [==========o----------] 100  = 50
Value: [50          ]
[ Reset ]

> drag 70
0 [==============o------] 100  = 70
Value: [70          ]
[ Reset ]

> clear
0 [==============o------] 100  = 70
Value: [            ]
[ Reset ]

> type 150
0 [==============o------] 100  = 70
Value: [150         ]
[ Reset ]

> enter
0 [==============o------] 100  = 70
Value: [150         ] ! out of range: value 150 is outside [0, 100]
[ Reset ]

> blur
0 [====================o] 100  = 100
Value: [100         ]
[ Reset ]

> reset
0 [o--------------------] 100  = 0
Value: [0           ]
[ Reset ]
";
    assert_eq!(out, expected);
}

#[test]
fn list_sort_select_remove() {
    let mut sample = ListSample::new();
    let (handled, out) = transcript(
        &mut sample,
        "# sort by id, then drop the smallest\nsort-id\nselect 0\nremove\nclick 3\n",
    );
    assert_eq!(handled, 3);
    let tail = "\
> remove
  ID ^  Name                     Description
  10    D-some item              blob
  20    A-Some Item------------  foo
  25    B-Another Item----       bar
[ Sort By ID ] [ Remove ]

> click 3
error: click: no such target 3
";
    assert!(out.ends_with(tail), "unexpected transcript:\n{out}");
    assert_eq!(sample.model().shown_ids(), vec![10, 20, 25]);
}

#[test]
fn virtual_list_window_follows_store() {
    let mut sample = VirtualListSample::new();
    let (handled, out) = transcript(&mut sample, "click 1\nscroll 1\nselect 2\n");
    assert_eq!(handled, 3);
    let tail = "\
> select 2
  ID  Name ^              Description
  25  B-Another Item----  bar
> 8   C-big               max power
  10  D-some item         blob
rows 2-4 of 4
";
    assert!(out.ends_with(tail), "unexpected transcript:\n{out}");
}

#[test]
fn triangle_recolour_and_reject() {
    let mut sample = TriangleSample::new();
    let (handled, out) = transcript(&mut sample, "type #000020\npick\ntype nope\npick\nclick\n");
    assert_eq!(handled, 5);
    let initial = "   *\n  ***\n *****\n*******\ncolour #ff8033 (r=255 g=128 b=51)\nColour: [#ff8033 ]\n[ Change Color ]\n";
    assert!(out.starts_with(initial), "unexpected transcript:\n{out}");
    assert!(out.contains("> pick\n   #\n  ###\n #####\n#######\ncolour #000020 (r=0 g=0 b=32)\nColour: [#000020 ]\n"));
    assert!(out.contains("Colour: [nope    ] ! "));
    assert_eq!(sample.model().colour().to_string(), "#000020");
}

#[test]
fn quit_stops_before_later_commands() {
    let mut sample = ListSample::new();
    let (handled, out) = transcript(&mut sample, "sort-id\nquit\nsort-id\n");
    assert_eq!(handled, 1);
    assert!(!sample.is_running());
    assert_eq!(out.matches("> sort-id").count(), 1);
}

#[test]
fn build_selects_each_sample() {
    for kind in SampleKind::ALL {
        let options = SampleOptions {
            sample: kind,
            ..SampleOptions::default()
        };
        let built = samples::build(&options);
        assert_eq!(built.name(), kind.name());
        assert!(built.is_running());
    }
}

#[test]
fn build_passes_binding_bounds() {
    let options = SampleOptions {
        sample: SampleKind::Binding,
        min: -10,
        max: 10,
        initial: 3,
        log_filter: None,
    };
    let built = samples::build(&options);
    let view = built.view();
    assert!(view.starts_with("-10 ["), "{view}");
    assert!(view.contains("Value: [3 "), "{view}");
}

#[test]
fn non_utf8_line_does_not_end_session() {
    init_tracing();
    let mut sample = BindingSample::new(Bounds::new(0, 100), 50);
    let mut out = Vec::new();
    let handled = host::run(&mut sample, &b"drag 10\ntype \xff\ndrag 70\n"[..], &mut out)
        .expect("in-memory io");
    assert_eq!(handled, 2);
    assert_eq!(sample.model().value(), 70);
    let out = String::from_utf8(out).expect("utf8 output");
    assert!(out.contains("error: line is not valid UTF-8"), "{out}");
    assert!(out.ends_with("> drag 70\n0 [==============o------] 100  = 70\nValue: [70          ]\n[ Reset ]\n"));
}
