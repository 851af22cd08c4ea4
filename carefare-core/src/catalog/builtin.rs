//! Vehicles operated in Wakayama city.

use crate::{Vehicle, VehicleKind};

pub(super) fn wakayama_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle::new(
            "regular-sedan",
            "一般車乗り込み（セダン）",
            VehicleKind::Sedan,
            1200,
            180,
            4,
        )
        .with_description("歩行可能な方向けの標準的なセダン車両")
        .with_features([
            "4人乗り",
            "快適なシート",
            "エアコン完備",
            "安全運転サポート",
            "荷物トランク完備",
        ])
        .with_image("/regular-passenger-vehicles.png"),
        Vehicle::new(
            "toyota-sienta",
            "一般車乗り込み（トヨタシエンタ）",
            VehicleKind::CompactMinivan,
            1400,
            200,
            7,
        )
        .with_description("歩行可能な方向けのコンパクトミニバン")
        .with_features([
            "7人乗り",
            "スライドドア",
            "低床設計で乗り降りしやすい",
            "エアコン完備",
            "安全運転サポート",
            "車椅子の方も乗り移り可能",
        ])
        .with_image("/regular-passenger-vehicles.png"),
        Vehicle::new(
            "japan-taxi",
            "一般車乗り込み（JapanTAXI）",
            VehicleKind::UniversalTaxi,
            1600,
            220,
            4,
        )
        .with_description("バリアフリー対応のユニバーサルデザインタクシー")
        .with_features([
            "4人乗り",
            "車椅子の方も乗り移り可能",
            "スロープ付き（手動車椅子対応）",
            "低床設計",
            "エアコン完備",
            "安全運転サポート",
            "ユニバーサルデザイン",
        ])
        .with_image("/regular-passenger-vehicles.png"),
        Vehicle::new(
            "wheelchair-light-vehicle",
            "軽自動車（車椅子対応）",
            VehicleKind::CompactWheelchair,
            2000,
            250,
            3,
        )
        .with_description("車椅子のまま乗車可能なコンパクトな軽自動車")
        .with_features([
            "車椅子1台対応",
            "リアスロープ付き",
            "車椅子固定装置完備",
            "介助者1名同乗可能",
            "低床設計",
            "燃費良好",
            "コンパクトで運転しやすい",
        ])
        .with_wheelchair_access()
        .with_image("/wheelchair-light-vehicle.png"),
        Vehicle::new(
            "wheelchair-van",
            "車椅子対応車両（大型）",
            VehicleKind::WheelchairVan,
            2500,
            300,
            6,
        )
        .with_description("車椅子のまま乗車可能な大型専用車両")
        .with_features([
            "車椅子2台まで対応",
            "スロープ付き",
            "車椅子固定装置",
            "介助者同乗可能",
            "低床設計",
            "広々とした車内空間",
        ])
        .with_wheelchair_access(),
        Vehicle::new(
            "stretcher-ambulance",
            "ストレッチャー車両（大型）",
            VehicleKind::Stretcher,
            4500,
            550,
            4,
        )
        .with_description("寝たきりの方向けの大型ストレッチャー対応車両")
        .with_features([
            "ストレッチャー1台完備",
            "電動昇降機能付き",
            "医療機器対応電源",
            "付き添い者2名まで同乗可能",
            "感染症対策済み",
            "酸素ボンベ対応",
            "車内照明・空調完備",
        ])
        .with_stretcher_support()
        .with_image("/stretcher-vehicle.png"),
        Vehicle::new(
            "minivan",
            "大型車両（ミニバン）",
            VehicleKind::Minivan,
            2000,
            250,
            8,
        )
        .with_description("複数名での移動に適した大型車両")
        .with_features([
            "7-8人乗り",
            "車椅子1台対応可能",
            "荷物スペース大",
            "バリアフリー設計",
            "介助者複数名同乗可能",
        ])
        .with_wheelchair_access(),
    ]
}
