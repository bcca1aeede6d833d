use mapscript::prelude::*;

/// Rendering scenarios compared byte for byte against the expected script
#[cfg(test)]
mod map_helper_tests {
    use super::*;

    fn helper() -> MapHelper {
        MapHelper::new()
    }

    fn container_map() -> Map {
        let mut map = Map::new();
        map.set_html_container_id("html_container_id");
        map
    }

    #[test]
    fn test_render_container() {
        let map = container_map();
        assert_eq!(
            helper().render_container(&map),
            "<div id=\"html_container_id\"></div>\n"
        );
    }

    #[test]
    fn test_render_stylesheets_puts_width_and_height_first() {
        let mut map = container_map();
        let mut options = Options::new();
        options.insert("height".to_string(), "100px".into());
        options.insert("width".to_string(), "200px".into());
        options.insert("option1".to_string(), "value1".into());
        map.set_stylesheet_options(options);

        assert_eq!(
            helper().render_stylesheets(&map),
            "<style type=\"text/css\">\n\
             #html_container_id{\n\
             width:200px;\n\
             height:100px;\n\
             option1:value1;\n\
             }\n\
             </style>\n"
        );
    }

    #[test]
    fn test_render_javascripts() {
        let mut map = container_map();
        map.set_center(Coordinate::new(1.1, 2.1, true));
        map.set_map_option("mapTypeId", "satellite");
        map.set_map_option("zoom", 5);
        let variable = map.javascript_variable().to_string();

        assert_eq!(
            helper().render_javascripts(&map).unwrap(),
            format!(
                "<script type=\"text/javascript\" src=\"http://maps.google.com/maps/api/js?sensor=false\"></script>\n\
                 <script type=\"text/javascript\">\n\
                 var {v} = new google.maps.Map(document.getElementById(\"html_container_id\"), {{\"mapTypeId\":google.maps.MapTypeId.SATELLITE,\"zoom\":5}});\n\
                 {v}.setCenter(new google.maps.LatLng(1.1, 2.1, true));\n\
                 </script>\n",
                v = variable
            )
        );
    }

    #[test]
    fn test_render_map_with_map_type_control_then_auto_zoom() {
        let mut map = container_map();
        map.set_map_option("mapTypeId", "satellite");
        map.set_map_option("zoom", 5);
        map.set_map_type_control(MapTypeControl::new(
            vec![MapTypeId::Roadmap],
            ControlPosition::BottomCenter,
            MapTypeControlStyle::DropdownMenu,
        ));
        let variable = map.javascript_variable().to_string();

        assert_eq!(
            helper().render_map(&map).unwrap(),
            format!(
                "var {} = new google.maps.Map(document.getElementById(\"html_container_id\"), {{\"mapTypeId\":google.maps.MapTypeId.SATELLITE,\"mapTypeControlOptions\":{{\"mapTypeIds\":[google.maps.MapTypeId.ROADMAP],\"position\":google.maps.ControlPosition.BOTTOM_CENTER,\"style\":google.maps.MapTypeControlStyle.DROPDOWN_MENU}},\"zoom\":5}});\n",
                variable
            )
        );

        map.set_map_type_control(None);
        map.set_auto_zoom(true);

        assert_eq!(
            helper().render_map(&map).unwrap(),
            format!(
                "var {} = new google.maps.Map(document.getElementById(\"html_container_id\"), {{\"mapTypeId\":google.maps.MapTypeId.SATELLITE}});\n",
                variable
            )
        );
    }

    #[test]
    fn test_render_center() {
        let mut map = Map::new();
        map.set_center(Coordinate::new(1.1, 2.1, true));

        assert_eq!(
            helper().render_center(&map),
            format!(
                "{}.setCenter(new google.maps.LatLng(1.1, 2.1, true));\n",
                map.javascript_variable()
            )
        );
    }

    #[test]
    fn test_render_bound() {
        let mut map = Map::new();
        map.set_bound(Bound::new(
            Coordinate::new(-1.1, 2.1, true),
            Coordinate::new(1.1, 2.1, true),
        ));
        let bound = map.bound().unwrap().javascript_variable().to_string();

        assert_eq!(
            helper().render_bound(&map),
            format!(
                "var {b} = new google.maps.LatLngBounds(new google.maps.LatLng(-1.1, 2.1, true), new google.maps.LatLng(1.1, 2.1, true));\n\
                 {m}.fitBounds({b});\n",
                b = bound,
                m = map.javascript_variable()
            )
        );
    }

    #[test]
    fn test_render_markers() {
        let mut map = Map::new();
        let marker = Marker::new(Coordinate::new(1.1, 2.1, false));
        let marker_variable = marker.javascript_variable().to_string();
        map.add_marker(marker);

        assert_eq!(
            helper().render_markers(&map),
            format!(
                "var {} = new google.maps.Marker({{\"map\":{},\"position\":new google.maps.LatLng(1.1, 2.1, false)}});\n",
                marker_variable,
                map.javascript_variable()
            )
        );
    }

    #[test]
    fn test_render_info_windows() {
        let mut map = Map::new();
        let window = InfoWindow::new("content")
            .with_position(Coordinate::new(1.1, 2.1, true))
            .with_open(true);
        let window_variable = window.javascript_variable().to_string();
        map.add_info_window(window);

        assert_eq!(
            helper().render_info_windows(&map),
            format!(
                "var {w} = new google.maps.InfoWindow({{\"position\":new google.maps.LatLng(1.1, 2.1, true),\"content\":\"content\"}});\n\
                 {w}.open({m});\n",
                w = window_variable,
                m = map.javascript_variable()
            )
        );
    }

    #[test]
    fn test_render_polylines() {
        let mut map = Map::new();
        let polyline = Polyline::new(vec![
            Coordinate::new(1.1, 2.1, true),
            Coordinate::new(3.1, 4.1, true),
        ]);
        let polyline_variable = polyline.javascript_variable().to_string();
        map.add_polyline(polyline);

        assert_eq!(
            helper().render_polylines(&map),
            format!(
                "var {} = new google.maps.Polyline({{\"map\":{},\"path\":[new google.maps.LatLng(1.1, 2.1, true),new google.maps.LatLng(3.1, 4.1, true)]}});\n",
                polyline_variable,
                map.javascript_variable()
            )
        );
    }

    #[test]
    fn test_render_polygons() {
        let mut map = Map::new();
        let polygon = Polygon::new(vec![
            Coordinate::new(1.1, 2.1, true),
            Coordinate::new(3.1, 4.1, true),
        ]);
        let polygon_variable = polygon.javascript_variable().to_string();
        map.add_polygon(polygon);

        assert_eq!(
            helper().render_polygons(&map),
            format!(
                "var {} = new google.maps.Polygon({{\"map\":{},\"paths\":[new google.maps.LatLng(1.1, 2.1, true),new google.maps.LatLng(3.1, 4.1, true)]}});\n",
                polygon_variable,
                map.javascript_variable()
            )
        );
    }

    #[test]
    fn test_render_rectangles() {
        let mut map = Map::new();
        let rectangle = Rectangle::new(Bound::new(
            Coordinate::new(-1.1, -2.1, true),
            Coordinate::new(1.1, 2.1, true),
        ));
        let rectangle_variable = rectangle.javascript_variable().to_string();
        let bound_variable = rectangle.bound().javascript_variable().to_string();
        map.add_rectangle(rectangle);

        assert_eq!(
            helper().render_rectangles(&map),
            format!(
                "var {b} = new google.maps.LatLngBounds(new google.maps.LatLng(-1.1, -2.1, true), new google.maps.LatLng(1.1, 2.1, true));\n\
                 var {r} = new google.maps.Rectangle({{\"map\":{m},\"bounds\":{b}}});\n",
                b = bound_variable,
                r = rectangle_variable,
                m = map.javascript_variable()
            )
        );
    }

    #[test]
    fn test_render_circles() {
        let mut map = Map::new();
        let circle = Circle::new(Coordinate::new(1.1, 2.1, true), 2.0);
        let circle_variable = circle.javascript_variable().to_string();
        map.add_circle(circle);

        assert_eq!(
            helper().render_circles(&map),
            format!(
                "var {} = new google.maps.Circle({{\"map\":{},\"center\":new google.maps.LatLng(1.1, 2.1, true),\"radius\":2}});\n",
                circle_variable,
                map.javascript_variable()
            )
        );
    }

    #[test]
    fn test_render_ground_overlays() {
        let mut map = Map::new();
        let overlay = GroundOverlay::new(
            "url",
            Bound::new(
                Coordinate::new(-1.1, -2.1, true),
                Coordinate::new(1.1, 2.1, true),
            ),
        );
        let overlay_variable = overlay.javascript_variable().to_string();
        let bound_variable = overlay.bound().javascript_variable().to_string();
        map.add_ground_overlay(overlay);

        assert_eq!(
            helper().render_ground_overlays(&map),
            format!(
                "var {b} = new google.maps.LatLngBounds(new google.maps.LatLng(-1.1, -2.1, true), new google.maps.LatLng(1.1, 2.1, true));\n\
                 var {g} = new google.maps.GroundOverlay(\"url\", {b}, {{\"map\":{m}}});\n",
                b = bound_variable,
                g = overlay_variable,
                m = map.javascript_variable()
            )
        );
    }

    #[test]
    fn test_render_events() {
        let mut map = Map::new();

        let dom_event = Event::new("instance", "event_name", "handle").with_capture(true);
        let dom_event_once = Event::new("instance", "event_name", "handle").with_capture(true);
        let event = Event::new("instance", "event_name", "handle");
        let event_once = Event::new("instance", "event_name", "handle");
        let variables: Vec<String> = [&dom_event, &dom_event_once, &event, &event_once]
            .iter()
            .map(|e| e.javascript_variable().to_string())
            .collect();

        // added out of category order on purpose
        let manager = map.event_manager_mut();
        manager.add_event_once(event_once);
        manager.add_event(event);
        manager.add_dom_event_once(dom_event_once);
        manager.add_dom_event(dom_event);

        assert_eq!(
            helper().render_events(&map),
            format!(
                "var {} = google.maps.event.addDomListener(instance, \"event_name\", handle, true);\n\
                 var {} = google.maps.event.addDomListenerOnce(instance, \"event_name\", handle, true);\n\
                 var {} = google.maps.event.addListener(instance, \"event_name\", handle);\n\
                 var {} = google.maps.event.addListenerOnce(instance, \"event_name\", handle);\n",
                variables[0], variables[1], variables[2], variables[3]
            )
        );
    }

    #[test]
    fn test_overlays_render_in_insertion_order() {
        let mut map = Map::new();
        let markers: Vec<Marker> = (0..5)
            .map(|i| Marker::new(Coordinate::new(i as f64, 0.0, true)))
            .collect();
        let variables: Vec<String> = markers
            .iter()
            .map(|m| m.javascript_variable().to_string())
            .collect();
        for marker in markers {
            map.add_marker(marker);
        }

        let output = helper().render_markers(&map);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        for (line, variable) in lines.iter().zip(&variables) {
            assert!(line.starts_with(&format!("var {} = new google.maps.Marker(", variable)));
            assert!(line.contains(&format!("\"map\":{},", map.javascript_variable())));
        }
    }

    #[test]
    fn test_full_render_is_idempotent_and_ordered() {
        let map = MapBuilder::new()
            .with_container_id("canvas")
            .with_center_and_zoom(Coordinate::new(45.0, 5.0, true), 8)
            .with_bound(Bound::new(
                Coordinate::new(44.0, 4.0, true),
                Coordinate::new(46.0, 6.0, true),
            ))
            .with_marker(Marker::new(Coordinate::new(45.1, 5.1, true)))
            .with_info_window(InfoWindow::new("standalone"))
            .with_polyline(Polyline::new(vec![Coordinate::new(45.0, 5.0, true)]))
            .with_polygon(Polygon::new(vec![Coordinate::new(45.0, 5.0, true)]))
            .with_rectangle(Rectangle::new(Bound::new(
                Coordinate::new(44.5, 4.5, true),
                Coordinate::new(45.5, 5.5, true),
            )))
            .with_circle(Circle::new(Coordinate::new(45.0, 5.0, true), 100.0))
            .with_ground_overlay(GroundOverlay::new(
                "overlay.png",
                Bound::new(
                    Coordinate::new(44.8, 4.8, true),
                    Coordinate::new(45.2, 5.2, true),
                ),
            ))
            .with_listener(
                ListenerKind::Event,
                Event::new("map", "idle", "function(){}"),
            )
            .build();

        let first = helper().render(&map).unwrap();
        let second = helper().render(&map).unwrap();
        assert_eq!(first, second);

        let position = |needle: &str| {
            first
                .find(needle)
                .unwrap_or_else(|| panic!("missing {}", needle))
        };
        assert!(first.starts_with("<div id=\"canvas\"></div>\n<style type=\"text/css\">\n"));
        assert!(position("new google.maps.Map(") < position(".setCenter("));
        assert!(position(".setCenter(") < position(".fitBounds("));
        assert!(position(".fitBounds(") < position("new google.maps.Marker("));
        assert!(position("new google.maps.Marker(") < position("new google.maps.InfoWindow("));
        assert!(position("new google.maps.InfoWindow(") < position("new google.maps.Polyline("));
        assert!(position("new google.maps.Polyline(") < position("new google.maps.Polygon("));
        assert!(position("new google.maps.Polygon(") < position("new google.maps.Rectangle("));
        assert!(position("new google.maps.Rectangle(") < position("new google.maps.Circle("));
        assert!(position("new google.maps.Circle(") < position("new google.maps.GroundOverlay("));
        assert!(position("new google.maps.GroundOverlay(") < position("addListener(map"));
        assert!(first.ends_with("</script>\n"));
        assert!(first.lines().all(|line| !line.is_empty()));
    }

    #[test]
    fn test_map_from_json_document() {
        let map = Map::from_json_str(
            r#"{
                "javascript_variable": "paris",
                "html_container_id": "paris_map",
                "map_options": {"mapTypeId": "hybrid", "zoom": 12},
                "stylesheet_options": {"width": "100%", "height": "400px"},
                "markers": [
                    {
                        "javascript_variable": "eiffel",
                        "position": {"latitude": 48.8584, "longitude": 2.2945, "no_wrap": false}
                    }
                ],
                "event_manager": {
                    "events": [
                        {
                            "javascript_variable": "on_click",
                            "instance": "eiffel",
                            "event_name": "click",
                            "handle": "showDetails"
                        }
                    ]
                }
            }"#,
        )
        .unwrap();

        let script = helper().render_javascripts(&map).unwrap();
        assert!(script.contains(
            "var paris = new google.maps.Map(document.getElementById(\"paris_map\"), {\"mapTypeId\":google.maps.MapTypeId.HYBRID,\"zoom\":12});\n"
        ));
        assert!(script.contains(
            "var eiffel = new google.maps.Marker({\"map\":paris,\"position\":new google.maps.LatLng(48.8584, 2.2945, false)});\n"
        ));
        assert!(script.contains(
            "var on_click = google.maps.event.addListener(eiffel, \"click\", showDetails);\n"
        ));
    }

    #[test]
    fn test_render_marker_with_icon_and_shadow() {
        let mut map = Map::new();
        let icon = MarkerImage::new("icon.png").with_size(Size::new(20.0, 34.0));
        let shadow = MarkerImage::new("shadow.png")
            .with_size(Size::new(37.0, 34.0))
            .with_origin(Point::new(0.0, 0.0))
            .with_anchor(Point::new(10.0, 34.0));
        let marker = Marker::new(Coordinate::new(1.1, 2.1, true))
            .with_icon(icon.clone())
            .with_shadow(shadow.clone());
        let marker_variable = marker.javascript_variable().to_string();
        map.add_marker(marker);

        assert_eq!(
            helper().render_markers(&map),
            format!(
                "var {i} = new google.maps.MarkerImage(\"icon.png\", new google.maps.Size(20, 34));\n\
                 var {s} = new google.maps.MarkerImage(\"shadow.png\", new google.maps.Size(37, 34), new google.maps.Point(0, 0), new google.maps.Point(10, 34));\n\
                 var {m} = new google.maps.Marker({{\"map\":{map},\"position\":new google.maps.LatLng(1.1, 2.1, true),\"icon\":{i},\"shadow\":{s}}});\n",
                i = icon.javascript_variable(),
                s = shadow.javascript_variable(),
                m = marker_variable,
                map = map.javascript_variable()
            )
        );
    }

    #[test]
    fn test_every_drawn_overlay_references_the_map() {
        let mut map = Map::new();
        let bound = || {
            Bound::new(
                Coordinate::new(-1.0, -1.0, true),
                Coordinate::new(1.0, 1.0, true),
            )
        };
        for i in 0..3 {
            let coordinate = Coordinate::new(i as f64, i as f64, true);
            map.add_polyline(Polyline::new(vec![coordinate]));
            map.add_polygon(Polygon::new(vec![coordinate]));
            map.add_rectangle(Rectangle::new(bound()));
            map.add_circle(Circle::new(coordinate, 10.0));
            map.add_ground_overlay(GroundOverlay::new("overlay.png", bound()));
        }

        let helper = helper();
        let reference = format!("\"map\":{}", map.javascript_variable());
        let renders = [
            ("Polyline", helper.render_polylines(&map)),
            ("Polygon", helper.render_polygons(&map)),
            ("Rectangle", helper.render_rectangles(&map)),
            ("Circle", helper.render_circles(&map)),
            ("GroundOverlay", helper.render_ground_overlays(&map)),
        ];

        for (class, output) in renders {
            let constructor = format!("new google.maps.{}(", class);
            let declarations: Vec<&str> = output
                .lines()
                .filter(|line| line.contains(&constructor))
                .collect();
            assert_eq!(declarations.len(), 3, "{}", class);
            assert!(declarations.iter().all(|line| line.contains(&reference)), "{}", class);
        }
    }

    #[test]
    fn test_fitted_bound_with_leading_rectangle_is_declared_once() {
        let map = MapBuilder::new()
            .with_rectangle(Rectangle::new(Bound::new(
                Coordinate::new(1.0, 1.0, true),
                Coordinate::new(2.0, 2.0, true),
            )))
            .with_circle(Circle::new(Coordinate::new(5.0, 5.0, true), 100.0))
            .fit_overlays()
            .build();

        let script = helper().render_javascripts(&map).unwrap();
        let declared: Vec<&str> = script
            .lines()
            .filter_map(|line| line.strip_prefix("var "))
            .filter_map(|line| line.split(' ').next())
            .collect();

        assert_eq!(declared.iter().filter(|v| v.starts_with("bound_")).count(), 2);
        for variable in &declared {
            assert_eq!(
                declared.iter().filter(|other| *other == variable).count(),
                1,
                "{} declared more than once",
                variable
            );
        }
    }

    #[test]
    fn test_map_document_with_invalid_variable_is_rejected() {
        let err = Map::from_json_str(
            r#"{"markers": [{"javascript_variable": "my marker", "position": {"latitude": 1.0, "longitude": 2.0}}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, MapError::Serialization(_)));
    }
}
