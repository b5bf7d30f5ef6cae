//! Built-in templates: an LVGL watch app header/source pair.
//!
//! Placeholders: `sample` (file and symbol names), `SAMPLE` (include guard
//! and enable macro), `Sample` (display name). The text is kept byte for
//! byte; both templates start with a newline.

use appgen_core::domain::TemplateSet;

/// Header template (`<name>.h`).
pub const LVGL_APP_HEADER: &str = r##"
/**
 * @file sample.h
 * @brief Sample app for C3 UI
 * Generated by app_create.py
 */

#ifndef _SAMPLE_APP_H
#define _SAMPLE_APP_H

#ifdef __cplusplus
extern "C"
{
#endif

#include "lvgl.h"
#include "app_hal.h"
#include "../../common/app_manager.h"

// #define ENABLE_APP_SAMPLE // Uncomment or define this to enable the sample app

#ifdef ENABLE_APP_SAMPLE

    // LV_IMAGE_DECLARE(sample_icon);

    void sample_screen_init(void);

    void ui_app_load(lv_obj_t **screen, void (*screen_init)(void));
    void ui_app_exit(void);

#endif

#ifdef __cplusplus
} /*extern "C"*/
#endif

#endif /*_SAMPLE_APP_H*/
"##;

/// Source template (`<name>.c`).
pub const LVGL_APP_SOURCE: &str = r##"
/**
 * @file sample.c
 * @brief Sample app for C3 UI
 * Generated by app_create.py
 */

#include "sample.h"

#ifdef ENABLE_APP_SAMPLE

/* Replace NULL with your app icon eg &sample_icon */
REGISTER_APP("Sample App", NULL, sample_screen_main, sample_screen_init);

void sample_screen_event_cb(lv_event_t *e)
{
    lv_event_code_t event_code = lv_event_get_code(e);
    if (event_code == LV_EVENT_SCREEN_LOAD_START)
    {
        /* Do something before the screen is loaded */
    }
    if (event_code == LV_EVENT_SCREEN_LOADED)
    {
        /* Do something after the screen is loaded */
        /* This is a good place to start animations or timers */
    }
    if (event_code == LV_EVENT_SCREEN_UNLOAD_START)
    {
        /* Do something before the screen is unloaded */
        /* This is a good place to save data or stop timers */
    }
    if (event_code == LV_EVENT_SCREEN_UNLOADED)
    {
        /* Do something after the screen is unloaded */
        /* This is a good place to clean up resources */

        /* Clean and delete screen if needed */
        lv_obj_delete(sample_screen_main);
        sample_screen_main = NULL;
    }

    if (event_code == LV_EVENT_GESTURE && lv_indev_get_gesture_dir(lv_indev_active()) == LV_DIR_RIGHT)
    {
        ui_app_exit(); /* exit to app list */
        /* Call this function to close the app, you can even use button instead of gesture */
    }
}

void sample_screen_init(void)
{
    /* create the screen */
    sample_screen_main = lv_obj_create(NULL);
    lv_obj_remove_flag(sample_screen_main, LV_OBJ_FLAG_SCROLLABLE);
    lv_obj_set_style_bg_color(sample_screen_main, lv_color_hex(0x000000), LV_PART_MAIN | LV_STATE_DEFAULT);
    lv_obj_set_style_bg_opa(sample_screen_main, 255, LV_PART_MAIN | LV_STATE_DEFAULT);

    lv_obj_t *label = lv_label_create(sample_screen_main);
    lv_obj_set_align(label, LV_ALIGN_CENTER);
    lv_label_set_text(label, "Hello world!\nSample App");

    lv_obj_add_event_cb(sample_screen_main, sample_screen_event_cb, LV_EVENT_ALL, NULL);
}

#endif

"##;

/// The LVGL app templates as a [`TemplateSet`].
pub const fn lvgl_app() -> TemplateSet {
    TemplateSet::new(LVGL_APP_HEADER, LVGL_APP_SOURCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use appgen_core::domain::{
        ArtifactKind, PLACEHOLDER_CAPITALIZED, PLACEHOLDER_LOWER, PLACEHOLDER_UPPER,
    };

    #[test]
    fn templates_start_with_newline() {
        assert!(LVGL_APP_HEADER.starts_with("\n/**"));
        assert!(LVGL_APP_SOURCE.starts_with("\n/**"));
    }

    #[test]
    fn source_ends_with_endif_and_blank_line() {
        assert!(LVGL_APP_SOURCE.ends_with("#endif\n\n"));
        assert!(LVGL_APP_HEADER.ends_with("#endif /*_SAMPLE_APP_H*/\n"));
    }

    #[test]
    fn every_placeholder_spelling_is_used() {
        for t in [LVGL_APP_HEADER, LVGL_APP_SOURCE] {
            assert!(t.contains(PLACEHOLDER_LOWER));
            assert!(t.contains(PLACEHOLDER_UPPER));
            assert!(t.contains(PLACEHOLDER_CAPITALIZED));
        }
    }

    #[test]
    fn label_text_keeps_escaped_newline() {
        assert!(LVGL_APP_SOURCE.contains(r#""Hello world!\nSample App""#));
    }

    #[test]
    fn set_maps_kinds() {
        let set = lvgl_app();
        assert_eq!(set.get(ArtifactKind::Header).as_str(), LVGL_APP_HEADER);
        assert_eq!(set.get(ArtifactKind::Source).as_str(), LVGL_APP_SOURCE);
    }
}
