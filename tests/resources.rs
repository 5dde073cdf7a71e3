use imageresizer::image_utils::InterpolationMethod;
use imageresizer::resources::ENGLISH;

#[test]
fn every_method_has_a_label_in_button_order() {
    let methods: Vec<_> = ENGLISH.compressions.iter().map(|(method, _)| *method).collect();
    assert_eq!(methods, InterpolationMethod::ALL.to_vec());
    let labels: Vec<_> = ENGLISH.compressions.iter().map(|(_, label)| *label).collect();
    assert_eq!(
        labels,
        ["Nearest", "Box", "Bilinear", "Hamming", "Bicubic", "Lanczos"]
    );
}

#[test]
fn method_label_looks_up_display_text() {
    assert_eq!(ENGLISH.method_label(InterpolationMethod::Hamming), "Hamming");
    assert_eq!(ENGLISH.method_label(InterpolationMethod::Bicubic), "Bicubic");
}

#[test]
fn download_caption_names_the_method() {
    assert_eq!(ENGLISH.download_caption(None), "Download");
    assert_eq!(
        ENGLISH.download_caption(Some(InterpolationMethod::Lanczos)),
        "Download - Lanczos"
    );
}
