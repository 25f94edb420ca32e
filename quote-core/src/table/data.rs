//! Built-in price list.
//!
//! Every table is written the way the price sheets are printed: a header of
//! widths, then one row of prices per projection (or height for vertical
//! screens). Rows stop early where the size is not manufactured.

use std::collections::BTreeMap;

use super::price_table::{PriceTable, WidthPrices};
use super::{PriceTables, TableId, WidthTableId};

/// Assemble the compiled-in price list.
pub(super) fn builtin() -> PriceTables {
    let grids: BTreeMap<TableId, PriceTable> = [
        (TableId::Pro100, pro100()),
        (TableId::Pro150, pro150()),
        (TableId::ProMega, pro_mega()),
        (TableId::StandardMotor, standard_motor()),
        (TableId::Hanging, hanging()),
        (TableId::Flat, flat()),
        (TableId::Bioclimatic, bioclimatic()),
        (TableId::OpenSky, open_sky()),
        (TableId::OpenRoof, open_roof()),
        (TableId::FixedBlades, fixed_blades()),
        (TableId::Balloon, balloon()),
        (TableId::Danae, danae()),
        (TableId::LightsStandard, lights_standard()),
        (TableId::LightsLux, lights_lux()),
        (TableId::Cover, cover()),
        (TableId::Cassette530, cassette_530()),
        (TableId::Cassette732, cassette_732()),
        (TableId::Epica, epica()),
        (TableId::ZipScreen, zip_screen()),
        (TableId::CassettePhi10, cassette_phi10()),
        (TableId::WireCabrio, wire_cabrio()),
        (TableId::VerticalVt, vertical_vt()),
    ]
    .into_iter()
    .collect();

    let width_tables: BTreeMap<WidthTableId, WidthPrices> = [
        (WidthTableId::ParapetLux, parapet_lux()),
        (WidthTableId::ParapetPanel, parapet_panel()),
    ]
    .into_iter()
    .collect();

    PriceTables {
        grids,
        width_tables,
    }
}

/// Pro 100 pergola base prices (projection x width).
fn pro100() -> PriceTable {
    PriceTable::from_sheet(
        &[
            300, 350, 400, 450, 500, 550, 600, 650, 700, 750, 800, 850, 900, 950, 1000, 1050,
            1100, 1150, 1200, 1250, 1300,
        ],
        &[
            (
                200,
                &[
                    3170.0, 3380.0, 3585.0, 3795.0, 4000.0, 4205.0, 4415.0, 4620.0, 4830.0, 5035.0,
                    5240.0, 5450.0, 5655.0, 5865.0, 6070.0, 6275.0, 6485.0, 6690.0, 6900.0, 7105.0,
                    7310.0,
                ],
            ),
            (
                250,
                &[
                    3370.0, 3590.0, 3810.0, 4030.0, 4250.0, 4470.0, 4690.0, 4910.0, 5130.0, 5350.0,
                    5570.0, 5790.0, 6010.0, 6230.0, 6450.0, 6670.0, 6890.0, 7110.0, 7330.0, 7550.0,
                    7770.0,
                ],
            ),
            (
                300,
                &[
                    3570.0, 3800.0, 4035.0, 4265.0, 4500.0, 4735.0, 4965.0, 5200.0, 5430.0, 5665.0,
                    5900.0, 6130.0, 6365.0, 6595.0, 6830.0, 7065.0, 7295.0, 7530.0, 7760.0, 7995.0,
                    8230.0,
                ],
            ),
            (
                350,
                &[
                    3765.0, 4010.0, 4260.0, 4505.0, 4750.0, 4995.0, 5240.0, 5490.0, 5735.0, 5980.0,
                    6225.0, 6470.0, 6720.0, 6965.0, 7210.0, 7455.0, 7700.0, 7950.0, 8195.0, 8440.0,
                    8685.0,
                ],
            ),
            (
                400,
                &[
                    3965.0, 4225.0, 4480.0, 4740.0, 5000.0, 5260.0, 5520.0, 5775.0, 6035.0, 6295.0,
                    6555.0, 6815.0, 7070.0, 7330.0, 7590.0, 7850.0, 8110.0, 8365.0, 8625.0, 8885.0,
                    9145.0,
                ],
            ),
            (
                450,
                &[
                    4160.0, 4435.0, 4705.0, 4980.0, 5250.0, 5520.0, 5795.0, 6065.0, 6340.0, 6610.0,
                    6880.0, 7155.0, 7425.0, 7700.0, 7970.0, 8240.0, 8515.0, 8785.0, 9060.0,
                ],
            ),
            (
                500,
                &[
                    4360.0, 4645.0, 4930.0, 5215.0, 5500.0, 5785.0, 6070.0, 6355.0, 6640.0, 6925.0,
                    7210.0, 7495.0, 7780.0, 8065.0, 8350.0, 8635.0, 8920.0, 9205.0, 9490.0,
                ],
            ),
        ],
    )
}

/// Pro 150 pergola base prices (projection x width).
fn pro150() -> PriceTable {
    PriceTable::from_sheet(
        &[300, 400, 500, 600, 700, 800, 900, 1000, 1100, 1200, 1300, 1400, 1500],
        &[
            (
                300,
                &[
                    4220.0, 4735.0, 5250.0, 5765.0, 6280.0, 6790.0, 7305.0, 7820.0, 8335.0, 8850.0,
                    9360.0, 9875.0, 10390.0,
                ],
            ),
            (
                350,
                &[
                    4440.0, 4980.0, 5525.0, 6070.0, 6610.0, 7155.0, 7695.0, 8240.0, 8785.0, 9325.0,
                    9870.0, 10410.0, 10955.0,
                ],
            ),
            (
                400,
                &[
                    4655.0, 5230.0, 5800.0, 6370.0, 6945.0, 7515.0, 8090.0, 8660.0, 9230.0, 9805.0,
                    10375.0, 10950.0, 11520.0,
                ],
            ),
            (
                450,
                &[
                    4875.0, 5475.0, 6075.0, 6675.0, 7275.0, 7880.0, 8480.0, 9080.0, 9680.0, 10280.0,
                    10885.0, 11485.0, 12085.0,
                ],
            ),
            (
                500,
                &[
                    5090.0, 5720.0, 6350.0, 6980.0, 7610.0, 8240.0, 8870.0, 9500.0, 10130.0,
                    10760.0, 11390.0, 12020.0, 12650.0,
                ],
            ),
            (
                550,
                &[
                    5305.0, 5965.0, 6625.0, 7285.0, 7945.0, 8600.0, 9260.0, 9920.0, 10580.0,
                    11240.0, 11895.0, 12555.0, 13215.0,
                ],
            ),
            (
                600,
                &[
                    5525.0, 6210.0, 6900.0, 7590.0, 8275.0, 8965.0, 9650.0, 10340.0, 11030.0,
                    11715.0, 12405.0, 13090.0, 13780.0,
                ],
            ),
            (
                650,
                &[
                    5740.0, 6460.0, 7175.0, 7890.0, 8610.0, 9325.0, 10045.0, 10760.0, 11475.0,
                    12195.0, 12910.0,
                ],
            ),
            (
                700,
                &[
                    5960.0, 6705.0, 7450.0, 8195.0, 8940.0, 9690.0, 10435.0, 11180.0, 11925.0,
                    12670.0, 13420.0,
                ],
            ),
        ],
    )
}

/// Pro Mega pergola base prices (projection x width).
fn pro_mega() -> PriceTable {
    PriceTable::from_sheet(
        &[500, 600, 700, 800, 900, 1000, 1100, 1200, 1300],
        &[
            (700, &[9640.0, 10470.0, 11295.0, 12125.0, 12950.0, 13780.0, 14610.0, 15435.0, 16265.0]),
            (750, &[9950.0, 10810.0, 11670.0, 12530.0, 13390.0, 14250.0, 15110.0, 15970.0, 16830.0]),
            (800, &[10260.0, 11150.0, 12045.0, 12935.0, 13830.0, 14720.0, 15610.0, 16505.0, 17395.0]),
            (850, &[10570.0, 11495.0, 12420.0, 13340.0, 14265.0, 15190.0, 16115.0, 17040.0, 17960.0]),
            (900, &[10880.0, 11835.0, 12790.0, 13750.0, 14705.0, 15660.0, 16615.0, 17570.0, 18530.0]),
            (950, &[11190.0, 12180.0, 13165.0, 14155.0, 15140.0, 16130.0, 17120.0, 18105.0, 19095.0]),
            (1000, &[11500.0, 12520.0, 13540.0, 14560.0, 15580.0, 16600.0, 17620.0, 18640.0, 19660.0]),
        ],
    )
}

/// Standard motor-box pergola base prices (projection x width).
fn standard_motor() -> PriceTable {
    PriceTable::from_sheet(
        &[200, 250, 300, 350, 400, 450, 500, 550, 600],
        &[
            (250, &[3000.0, 3205.0, 3410.0, 3620.0, 3825.0, 4030.0, 4240.0, 4445.0, 4650.0]),
            (300, &[3155.0, 3370.0, 3590.0, 3810.0, 4030.0, 4245.0, 4465.0, 4685.0, 4900.0]),
            (350, &[3310.0, 3540.0, 3770.0, 4000.0, 4230.0, 4460.0, 4690.0, 4925.0, 5155.0]),
            (400, &[3460.0, 3705.0, 3950.0, 4190.0, 4435.0, 4675.0, 4920.0, 5165.0, 5405.0]),
            (450, &[3615.0, 3870.0, 4125.0, 4380.0, 4635.0, 4890.0, 5150.0, 5405.0, 5660.0]),
            (500, &[3770.0, 4040.0, 4305.0, 4570.0, 4840.0, 5110.0, 5375.0, 5640.0, 5910.0]),
        ],
    )
}

/// Hanging pergola base prices (projection x width).
fn hanging() -> PriceTable {
    PriceTable::from_sheet(
        &[200, 250, 300, 350, 400, 450, 500, 550, 600],
        &[
            (200, &[2350.0, 2530.0, 2710.0, 2890.0, 3070.0, 3250.0, 3430.0, 3610.0, 3790.0]),
            (250, &[2490.0, 2680.0, 2870.0, 3065.0, 3255.0, 3445.0, 3640.0, 3830.0, 4020.0]),
            (300, &[2630.0, 2830.0, 3035.0, 3240.0, 3440.0, 3640.0, 3845.0, 4050.0, 4250.0]),
            (350, &[2770.0, 2985.0, 3200.0, 3410.0, 3625.0, 3840.0, 4050.0, 4265.0, 4480.0]),
            (400, &[2910.0, 3135.0, 3360.0, 3585.0, 3810.0, 4035.0, 4260.0, 4485.0]),
        ],
    )
}

/// Flat pergola base prices (projection x width).
fn flat() -> PriceTable {
    PriceTable::from_sheet(
        &[200, 250, 300, 350, 400, 450, 500, 550, 600, 650, 700],
        &[
            (
                200,
                &[
                    3205.0, 3430.0, 3655.0, 3880.0, 4110.0, 4335.0, 4560.0, 4785.0, 5010.0, 5240.0,
                    5465.0,
                ],
            ),
            (
                250,
                &[
                    3390.0, 3630.0, 3870.0, 4115.0, 4355.0, 4595.0, 4840.0, 5080.0, 5320.0, 5560.0,
                    5800.0,
                ],
            ),
            (
                300,
                &[
                    3575.0, 3830.0, 4090.0, 4345.0, 4600.0, 4860.0, 5115.0, 5370.0, 5630.0, 5885.0,
                    6140.0,
                ],
            ),
            (
                350,
                &[
                    3760.0, 4035.0, 4305.0, 4575.0, 4850.0, 5120.0, 5390.0, 5665.0, 5935.0, 6210.0,
                    6480.0,
                ],
            ),
            (
                400,
                &[
                    3950.0, 4235.0, 4520.0, 4810.0, 5095.0, 5385.0, 5670.0, 5955.0, 6245.0, 6530.0,
                    6820.0,
                ],
            ),
            (
                450,
                &[
                    4135.0, 4435.0, 4740.0, 5040.0, 5345.0, 5645.0, 5950.0, 6250.0, 6550.0, 6855.0,
                    7155.0,
                ],
            ),
            (
                500,
                &[
                    4320.0, 4640.0, 4955.0, 5270.0, 5590.0, 5910.0, 6225.0, 6540.0, 6860.0, 7180.0,
                    7495.0,
                ],
            ),
        ],
    )
}

/// Bioclimatic pergola base prices (projection x width).
fn bioclimatic() -> PriceTable {
    PriceTable::from_sheet(
        &[200, 250, 300, 350, 400, 450, 500, 550, 600],
        &[
            (200, &[4450.0, 4750.0, 5050.0, 5345.0, 5645.0, 5940.0, 6240.0, 6540.0, 6835.0]),
            (250, &[4705.0, 5025.0, 5345.0, 5665.0, 5985.0, 6305.0, 6625.0, 6945.0, 7265.0]),
            (300, &[4960.0, 5300.0, 5640.0, 5985.0, 6325.0, 6670.0, 7010.0, 7350.0, 7695.0]),
            (350, &[5210.0, 5575.0, 5940.0, 6305.0, 6665.0, 7030.0, 7395.0, 7760.0, 8125.0]),
            (400, &[5465.0, 5850.0, 6235.0, 6620.0, 7010.0, 7395.0, 7780.0, 8165.0, 8550.0]),
            (450, &[5715.0, 6125.0, 6535.0, 6940.0, 7350.0, 7755.0, 8165.0, 8575.0, 8980.0]),
            (500, &[5970.0, 6400.0, 6830.0, 7260.0, 7690.0, 8120.0, 8550.0, 8980.0, 9410.0]),
            (550, &[6225.0, 6675.0, 7125.0, 7580.0, 8030.0, 8485.0, 8935.0]),
            (600, &[6475.0, 6950.0, 7425.0, 7900.0, 8370.0, 8845.0, 9320.0]),
        ],
    )
}

/// Open Sky pergola base prices (projection x width).
fn open_sky() -> PriceTable {
    PriceTable::from_sheet(
        &[200, 250, 300, 350, 400, 450, 500, 550, 600],
        &[
            (200, &[4890.0, 5205.0, 5520.0, 5840.0, 6155.0, 6475.0, 6790.0, 7105.0, 7425.0]),
            (250, &[5160.0, 5500.0, 5840.0, 6180.0, 6520.0, 6860.0, 7200.0, 7540.0, 7880.0]),
            (300, &[5430.0, 5795.0, 6160.0, 6520.0, 6885.0, 7245.0, 7610.0, 7975.0, 8335.0]),
            (350, &[5705.0, 6090.0, 6475.0, 6860.0, 7250.0, 7635.0, 8020.0, 8405.0, 8790.0]),
            (400, &[5975.0, 6385.0, 6795.0, 7205.0, 7610.0, 8020.0, 8430.0, 8840.0, 9250.0]),
            (450, &[6250.0, 6680.0, 7110.0, 7545.0, 7975.0, 8410.0, 8840.0, 9270.0, 9705.0]),
            (500, &[6520.0, 6975.0, 7430.0, 7885.0, 8340.0, 8795.0, 9250.0, 9705.0, 10160.0]),
        ],
    )
}

/// Open Roof pergola base prices (projection x width).
fn open_roof() -> PriceTable {
    PriceTable::from_sheet(
        &[300, 350, 400, 450, 500, 550, 600, 650, 700],
        &[
            (300, &[6505.0, 6880.0, 7260.0, 7640.0, 8015.0, 8390.0, 8770.0, 9150.0, 9525.0]),
            (350, &[6840.0, 7240.0, 7640.0, 8040.0, 8440.0, 8845.0, 9245.0, 9645.0, 10050.0]),
            (400, &[7170.0, 7595.0, 8020.0, 8445.0, 8870.0, 9295.0, 9720.0, 10145.0, 10570.0]),
            (450, &[7500.0, 7950.0, 8400.0, 8850.0, 9300.0, 9745.0, 10195.0, 10645.0, 11090.0]),
            (500, &[7835.0, 8310.0, 8780.0, 9250.0, 9725.0, 10200.0, 10670.0, 11140.0, 11615.0]),
            (550, &[8170.0, 8665.0, 9160.0, 9655.0, 10150.0, 10650.0, 11145.0, 11640.0, 12140.0]),
            (600, &[8500.0, 9020.0, 9540.0, 10060.0, 10580.0, 11100.0, 11620.0, 12140.0, 12660.0]),
        ],
    )
}

/// Fixed-blade pergola roof prices (projection x width).
fn fixed_blades() -> PriceTable {
    PriceTable::from_sheet(
        &[100, 150, 200, 250, 300, 350, 400, 450, 500, 550, 600],
        &[
            (
                200,
                &[
                    1135.0, 1255.0, 1370.0, 1490.0, 1610.0, 1725.0, 1845.0, 1960.0, 2080.0, 2200.0,
                    2315.0,
                ],
            ),
            (
                250,
                &[
                    1225.0, 1350.0, 1480.0, 1610.0, 1735.0, 1860.0, 1990.0, 2120.0, 2245.0, 2370.0,
                    2500.0,
                ],
            ),
            (
                300,
                &[
                    1315.0, 1450.0, 1590.0, 1725.0, 1860.0, 2000.0, 2135.0, 2275.0, 2410.0, 2545.0,
                    2685.0,
                ],
            ),
            (
                350,
                &[
                    1405.0, 1550.0, 1695.0, 1840.0, 1990.0, 2135.0, 2280.0, 2430.0, 2575.0, 2720.0,
                    2870.0,
                ],
            ),
            (
                400,
                &[
                    1490.0, 1650.0, 1805.0, 1960.0, 2115.0, 2270.0, 2430.0, 2585.0, 2740.0, 2895.0,
                    3050.0,
                ],
            ),
            (
                450,
                &[
                    1580.0, 1745.0, 1910.0, 2080.0, 2245.0, 2410.0, 2575.0, 2740.0, 2905.0, 3070.0,
                    3235.0,
                ],
            ),
            (
                500,
                &[
                    1670.0, 1845.0, 2020.0, 2195.0, 2370.0, 2545.0, 2720.0, 2895.0, 3070.0, 3245.0,
                    3420.0,
                ],
            ),
        ],
    )
}

/// Balloon pergola base prices (projection x width).
fn balloon() -> PriceTable {
    PriceTable::from_sheet(
        &[200, 250, 300, 350, 400],
        &[
            (150, &[1765.0, 1895.0, 2025.0, 2160.0, 2290.0]),
            (200, &[1885.0, 2025.0, 2165.0, 2305.0, 2450.0]),
            (250, &[2005.0, 2155.0, 2305.0, 2455.0, 2605.0]),
            (300, &[2125.0, 2285.0, 2445.0, 2605.0, 2760.0]),
            (350, &[2245.0, 2415.0, 2585.0, 2750.0, 2920.0]),
            (400, &[2370.0, 2545.0, 2720.0, 2900.0, 3075.0]),
        ],
    )
}

/// Danae pergola base prices (projection x width).
fn danae() -> PriceTable {
    PriceTable::from_sheet(
        &[150, 200, 250, 300, 350, 400],
        &[
            (150, &[1320.0, 1435.0, 1550.0, 1660.0, 1770.0, 1885.0]),
            (200, &[1420.0, 1540.0, 1660.0, 1780.0, 1900.0, 2020.0]),
            (250, &[1520.0, 1645.0, 1770.0, 1900.0, 2030.0, 2155.0]),
            (300, &[1615.0, 1750.0, 1885.0, 2020.0, 2155.0, 2290.0]),
            (350, &[1710.0, 1855.0, 2000.0, 2140.0, 2280.0, 2425.0]),
        ],
    )
}

/// On/off LED spot lighting (projection x width).
fn lights_standard() -> PriceTable {
    PriceTable::from_sheet(
        &[
            150, 200, 250, 300, 350, 400, 450, 500, 550, 600, 650, 700, 750, 800, 850, 900, 950,
            1000, 1050, 1100, 1150, 1200, 1250, 1300, 1350, 1400, 1450, 1500,
        ],
        &[
            (
                150,
                &[
                    290.0, 315.0, 335.0, 355.0, 380.0, 400.0, 425.0, 445.0, 465.0, 490.0, 510.0,
                    535.0, 555.0, 575.0, 600.0, 620.0, 645.0, 665.0, 685.0, 710.0, 730.0, 755.0,
                    775.0, 795.0, 820.0, 840.0, 865.0, 885.0,
                ],
            ),
            (
                200,
                &[
                    310.0, 330.0, 355.0, 380.0, 400.0, 425.0, 445.0, 470.0, 495.0, 515.0, 540.0,
                    560.0, 585.0, 610.0, 630.0, 655.0, 675.0, 700.0, 725.0, 745.0, 770.0, 790.0,
                    815.0, 840.0, 860.0, 885.0, 905.0, 930.0,
                ],
            ),
            (
                250,
                &[
                    325.0, 350.0, 375.0, 400.0, 425.0, 445.0, 470.0, 495.0, 520.0, 545.0, 565.0,
                    590.0, 615.0, 640.0, 665.0, 685.0, 710.0, 735.0, 760.0, 785.0, 805.0, 830.0,
                    855.0, 880.0, 905.0, 925.0, 950.0, 975.0,
                ],
            ),
            (
                300,
                &[
                    345.0, 370.0, 395.0, 420.0, 445.0, 470.0, 495.0, 520.0, 545.0, 570.0, 595.0,
                    620.0, 645.0, 670.0, 695.0, 720.0, 745.0, 770.0, 795.0, 820.0, 845.0, 870.0,
                    895.0, 920.0, 945.0, 970.0, 995.0, 1020.0,
                ],
            ),
            (
                350,
                &[
                    365.0, 390.0, 415.0, 440.0, 465.0, 495.0, 520.0, 545.0, 570.0, 595.0, 625.0,
                    650.0, 675.0, 700.0, 725.0, 755.0, 780.0, 805.0, 830.0, 855.0, 885.0, 910.0,
                    935.0, 960.0, 985.0, 1015.0, 1040.0, 1065.0,
                ],
            ),
            (
                400,
                &[
                    380.0, 410.0, 435.0, 460.0, 490.0, 515.0, 545.0, 570.0, 595.0, 625.0, 650.0,
                    680.0, 705.0, 730.0, 760.0, 785.0, 815.0, 840.0, 865.0, 895.0, 920.0, 950.0,
                    975.0, 1000.0, 1030.0, 1055.0, 1085.0, 1110.0,
                ],
            ),
            (
                450,
                &[
                    400.0, 425.0, 455.0, 485.0, 510.0, 540.0, 565.0, 595.0, 625.0, 650.0, 680.0,
                    705.0, 735.0, 765.0, 790.0, 820.0, 845.0, 875.0, 905.0, 930.0, 960.0, 985.0,
                    1015.0, 1045.0, 1070.0, 1100.0, 1125.0, 1155.0,
                ],
            ),
            (
                500,
                &[
                    415.0, 445.0, 475.0, 505.0, 535.0, 560.0, 590.0, 620.0, 650.0, 680.0, 705.0,
                    735.0, 765.0, 795.0, 825.0, 850.0, 880.0, 910.0, 940.0, 970.0, 995.0, 1025.0,
                    1055.0, 1085.0, 1115.0, 1140.0, 1170.0, 1200.0,
                ],
            ),
            (
                600,
                &[
                    455.0, 485.0, 515.0, 545.0, 575.0, 610.0, 640.0, 670.0, 700.0, 730.0, 765.0,
                    795.0, 825.0, 855.0, 885.0, 920.0, 950.0, 980.0, 1010.0, 1040.0, 1075.0, 1105.0,
                    1135.0, 1165.0, 1195.0, 1230.0, 1260.0, 1290.0,
                ],
            ),
            (
                700,
                &[
                    490.0, 520.0, 555.0, 590.0, 620.0, 655.0, 685.0, 720.0, 755.0, 785.0, 820.0,
                    850.0, 885.0, 920.0, 950.0, 985.0, 1015.0, 1050.0, 1085.0, 1115.0, 1150.0,
                    1180.0, 1215.0, 1250.0, 1280.0, 1315.0, 1345.0, 1380.0,
                ],
            ),
            (
                800,
                &[
                    525.0, 560.0, 595.0, 630.0, 665.0, 700.0, 735.0, 770.0, 805.0, 840.0, 875.0,
                    910.0, 945.0, 980.0, 1015.0, 1050.0, 1085.0, 1120.0, 1155.0, 1190.0, 1225.0,
                    1260.0, 1295.0, 1330.0, 1365.0, 1400.0, 1435.0, 1470.0,
                ],
            ),
            (
                900,
                &[
                    560.0, 600.0, 635.0, 670.0, 710.0, 745.0, 785.0, 820.0, 855.0, 895.0, 930.0,
                    970.0, 1005.0, 1040.0, 1080.0, 1115.0, 1155.0, 1190.0, 1225.0, 1265.0, 1300.0,
                    1340.0, 1375.0, 1410.0, 1450.0, 1485.0, 1525.0, 1560.0,
                ],
            ),
            (
                1000,
                &[
                    595.0, 635.0, 675.0, 715.0, 755.0, 790.0, 830.0, 870.0, 910.0, 950.0, 985.0,
                    1025.0, 1065.0, 1105.0, 1145.0, 1180.0, 1220.0, 1260.0, 1300.0, 1340.0, 1375.0,
                    1415.0, 1455.0, 1495.0, 1535.0, 1570.0, 1610.0, 1650.0,
                ],
            ),
        ],
    )
}

/// Dimmable LED spot lighting (projection x width).
fn lights_lux() -> PriceTable {
    PriceTable::from_sheet(
        &[
            150, 200, 250, 300, 350, 400, 450, 500, 550, 600, 650, 700, 750, 800, 850, 900, 950,
            1000, 1050, 1100, 1150, 1200, 1250, 1300, 1350, 1400, 1450, 1500,
        ],
        &[
            (
                150,
                &[
                    415.0, 445.0, 475.0, 505.0, 535.0, 565.0, 595.0, 625.0, 655.0, 690.0, 720.0,
                    750.0, 780.0, 810.0, 840.0, 870.0, 900.0, 930.0, 960.0, 990.0, 1025.0, 1055.0,
                    1085.0, 1115.0, 1145.0, 1175.0, 1205.0, 1235.0,
                ],
            ),
            (
                200,
                &[
                    440.0, 470.0, 500.0, 535.0, 565.0, 600.0, 630.0, 660.0, 695.0, 725.0, 760.0,
                    790.0, 820.0, 855.0, 885.0, 920.0, 950.0, 980.0, 1015.0, 1045.0, 1080.0, 1110.0,
                    1140.0, 1175.0, 1205.0, 1240.0, 1270.0, 1300.0,
                ],
            ),
            (
                250,
                &[
                    465.0, 495.0, 530.0, 565.0, 595.0, 630.0, 665.0, 700.0, 730.0, 765.0, 800.0,
                    830.0, 865.0, 900.0, 930.0, 965.0, 1000.0, 1030.0, 1065.0, 1100.0, 1135.0,
                    1165.0, 1200.0, 1235.0, 1265.0, 1300.0, 1335.0, 1370.0,
                ],
            ),
            (
                300,
                &[
                    490.0, 525.0, 560.0, 595.0, 630.0, 665.0, 700.0, 735.0, 770.0, 805.0, 840.0,
                    875.0, 910.0, 945.0, 980.0, 1015.0, 1050.0, 1085.0, 1120.0, 1155.0, 1190.0,
                    1225.0, 1260.0, 1295.0, 1330.0, 1365.0, 1400.0, 1435.0,
                ],
            ),
            (
                350,
                &[
                    515.0, 550.0, 585.0, 620.0, 660.0, 695.0, 730.0, 770.0, 805.0, 840.0, 880.0,
                    915.0, 950.0, 990.0, 1025.0, 1060.0, 1095.0, 1135.0, 1170.0, 1205.0, 1245.0,
                    1280.0, 1315.0, 1350.0, 1390.0, 1425.0, 1460.0, 1500.0,
                ],
            ),
            (
                400,
                &[
                    540.0, 575.0, 615.0, 650.0, 690.0, 730.0, 765.0, 805.0, 840.0, 880.0, 920.0,
                    955.0, 995.0, 1030.0, 1070.0, 1110.0, 1145.0, 1185.0, 1220.0, 1260.0, 1300.0,
                    1335.0, 1375.0, 1410.0, 1450.0, 1490.0, 1525.0, 1565.0,
                ],
            ),
            (
                450,
                &[
                    565.0, 600.0, 640.0, 680.0, 720.0, 760.0, 800.0, 840.0, 880.0, 920.0, 960.0,
                    1000.0, 1035.0, 1075.0, 1115.0, 1155.0, 1195.0, 1235.0, 1275.0, 1315.0, 1355.0,
                    1390.0, 1430.0, 1470.0, 1510.0, 1550.0, 1590.0, 1630.0,
                ],
            ),
            (
                500,
                &[
                    590.0, 630.0, 670.0, 710.0, 750.0, 795.0, 835.0, 875.0, 915.0, 955.0, 1000.0,
                    1040.0, 1080.0, 1120.0, 1160.0, 1205.0, 1245.0, 1285.0, 1325.0, 1365.0, 1410.0,
                    1450.0, 1490.0, 1530.0, 1570.0, 1615.0, 1655.0, 1695.0,
                ],
            ),
            (
                600,
                &[
                    640.0, 680.0, 725.0, 770.0, 815.0, 860.0, 900.0, 945.0, 990.0, 1035.0, 1080.0,
                    1120.0, 1165.0, 1210.0, 1255.0, 1300.0, 1340.0, 1385.0, 1430.0, 1475.0, 1520.0,
                    1560.0, 1605.0, 1650.0, 1695.0, 1740.0, 1780.0, 1825.0,
                ],
            ),
            (
                700,
                &[
                    690.0, 735.0, 780.0, 830.0, 875.0, 925.0, 970.0, 1015.0, 1065.0, 1110.0, 1160.0,
                    1205.0, 1250.0, 1300.0, 1345.0, 1395.0, 1440.0, 1485.0, 1535.0, 1580.0, 1630.0,
                    1675.0, 1720.0, 1770.0, 1815.0, 1865.0, 1910.0, 1955.0,
                ],
            ),
            (
                800,
                &[
                    740.0, 790.0, 840.0, 890.0, 940.0, 990.0, 1040.0, 1090.0, 1140.0, 1190.0,
                    1240.0, 1290.0, 1340.0, 1390.0, 1440.0, 1490.0, 1540.0, 1590.0, 1640.0, 1690.0,
                    1740.0, 1790.0, 1840.0, 1890.0, 1940.0, 1990.0, 2040.0, 2090.0,
                ],
            ),
            (
                900,
                &[
                    790.0, 840.0, 895.0, 945.0, 1000.0, 1055.0, 1105.0, 1160.0, 1210.0, 1265.0,
                    1320.0, 1370.0, 1425.0, 1475.0, 1530.0, 1585.0, 1635.0, 1690.0, 1740.0, 1795.0,
                    1850.0, 1900.0, 1955.0, 2005.0, 2060.0, 2115.0, 2165.0, 2220.0,
                ],
            ),
            (
                1000,
                &[
                    840.0, 895.0, 950.0, 1005.0, 1060.0, 1120.0, 1175.0, 1230.0, 1285.0, 1340.0,
                    1400.0, 1455.0, 1510.0, 1565.0, 1620.0, 1680.0, 1735.0, 1790.0, 1845.0, 1900.0,
                    1960.0, 2015.0, 2070.0, 2125.0, 2180.0, 2240.0, 2295.0, 2350.0,
                ],
            ),
        ],
    )
}

/// Roof cover prices (projection x width).
fn cover() -> PriceTable {
    PriceTable::from_sheet(
        &[
            150, 200, 250, 300, 350, 400, 450, 500, 550, 600, 650, 700, 750, 800, 850, 900, 950,
            1000, 1050, 1100, 1150, 1200, 1250, 1300, 1350, 1400, 1450, 1500,
        ],
        &[
            (
                150,
                &[
                    285.0, 315.0, 345.0, 375.0, 405.0, 435.0, 465.0, 495.0, 525.0, 555.0, 585.0,
                    620.0, 650.0, 680.0, 710.0, 740.0, 770.0, 800.0, 830.0, 860.0, 890.0, 920.0,
                    950.0, 980.0, 1010.0, 1040.0, 1070.0, 1100.0,
                ],
            ),
            (
                200,
                &[
                    310.0, 345.0, 375.0, 410.0, 445.0, 475.0, 510.0, 540.0, 575.0, 610.0, 640.0,
                    675.0, 705.0, 740.0, 775.0, 805.0, 840.0, 870.0, 905.0, 940.0, 970.0, 1005.0,
                    1035.0, 1070.0, 1105.0, 1135.0, 1170.0, 1200.0,
                ],
            ),
            (
                250,
                &[
                    335.0, 375.0, 410.0, 445.0, 480.0, 515.0, 550.0, 590.0, 625.0, 660.0, 695.0,
                    730.0, 765.0, 800.0, 840.0, 875.0, 910.0, 945.0, 980.0, 1015.0, 1050.0, 1090.0,
                    1125.0, 1160.0, 1195.0, 1230.0, 1265.0, 1300.0,
                ],
            ),
            (
                300,
                &[
                    365.0, 400.0, 440.0, 480.0, 520.0, 555.0, 595.0, 635.0, 670.0, 710.0, 750.0,
                    785.0, 825.0, 865.0, 900.0, 940.0, 980.0, 1020.0, 1055.0, 1095.0, 1135.0,
                    1170.0, 1210.0, 1250.0, 1290.0, 1325.0, 1365.0, 1405.0,
                ],
            ),
            (
                350,
                &[
                    390.0, 430.0, 470.0, 515.0, 555.0, 595.0, 635.0, 680.0, 720.0, 760.0, 800.0,
                    845.0, 885.0, 925.0, 965.0, 1010.0, 1050.0, 1090.0, 1130.0, 1175.0, 1215.0,
                    1255.0, 1295.0, 1340.0, 1380.0, 1420.0, 1460.0, 1505.0,
                ],
            ),
            (
                400,
                &[
                    415.0, 460.0, 505.0, 550.0, 590.0, 635.0, 680.0, 725.0, 770.0, 810.0, 855.0,
                    900.0, 945.0, 990.0, 1030.0, 1075.0, 1120.0, 1165.0, 1210.0, 1250.0, 1295.0,
                    1340.0, 1385.0, 1430.0, 1470.0, 1515.0, 1560.0, 1605.0,
                ],
            ),
            (
                450,
                &[
                    440.0, 490.0, 535.0, 580.0, 630.0, 675.0, 725.0, 770.0, 815.0, 865.0, 910.0,
                    955.0, 1005.0, 1050.0, 1095.0, 1145.0, 1190.0, 1235.0, 1285.0, 1330.0, 1375.0,
                    1425.0, 1470.0, 1520.0, 1565.0, 1610.0, 1660.0, 1705.0,
                ],
            ),
            (
                500,
                &[
                    470.0, 520.0, 570.0, 615.0, 665.0, 715.0, 765.0, 815.0, 865.0, 915.0, 965.0,
                    1015.0, 1060.0, 1110.0, 1160.0, 1210.0, 1260.0, 1310.0, 1360.0, 1410.0, 1460.0,
                    1510.0, 1560.0, 1605.0, 1655.0, 1705.0, 1755.0, 1805.0,
                ],
            ),
            (
                600,
                &[
                    520.0, 575.0, 630.0, 685.0, 740.0, 795.0, 850.0, 905.0, 960.0, 1015.0, 1070.0,
                    1125.0, 1180.0, 1235.0, 1290.0, 1345.0, 1400.0, 1455.0, 1510.0, 1565.0, 1620.0,
                    1675.0, 1730.0, 1785.0, 1840.0, 1895.0, 1950.0, 2005.0,
                ],
            ),
            (
                700,
                &[
                    575.0, 635.0, 695.0, 755.0, 815.0, 875.0, 935.0, 995.0, 1060.0, 1120.0, 1180.0,
                    1240.0, 1300.0, 1360.0, 1420.0, 1480.0, 1540.0, 1600.0, 1660.0, 1725.0, 1785.0,
                    1845.0, 1905.0, 1965.0, 2025.0, 2085.0, 2145.0, 2205.0,
                ],
            ),
            (
                800,
                &[
                    625.0, 690.0, 760.0, 825.0, 890.0, 955.0, 1020.0, 1090.0, 1155.0, 1220.0,
                    1285.0, 1350.0, 1420.0, 1485.0, 1550.0, 1615.0, 1680.0, 1750.0, 1815.0, 1880.0,
                    1945.0, 2010.0, 2080.0, 2145.0, 2210.0, 2275.0, 2340.0, 2410.0,
                ],
            ),
            (
                900,
                &[
                    680.0, 750.0, 820.0, 895.0, 965.0, 1035.0, 1110.0, 1180.0, 1250.0, 1320.0,
                    1395.0, 1465.0, 1535.0, 1610.0, 1680.0, 1750.0, 1820.0, 1895.0, 1965.0, 2035.0,
                    2110.0, 2180.0, 2250.0, 2325.0, 2395.0, 2465.0, 2540.0, 2610.0,
                ],
            ),
            (
                1000,
                &[
                    730.0, 810.0, 885.0, 960.0, 1040.0, 1115.0, 1195.0, 1270.0, 1345.0, 1425.0,
                    1500.0, 1580.0, 1655.0, 1730.0, 1810.0, 1885.0, 1965.0, 2040.0, 2115.0, 2195.0,
                    2270.0, 2350.0, 2425.0, 2500.0, 2580.0, 2655.0, 2735.0, 2810.0,
                ],
            ),
        ],
    )
}

/// Cassette 530 awning prices (projection x width).
fn cassette_530() -> PriceTable {
    PriceTable::from_sheet(
        &[220, 250, 300, 350, 400, 450, 500],
        &[
            (180, &[1220.0, 1270.0, 1350.0, 1430.0, 1510.0, 1595.0, 1675.0]),
            (200, &[1245.0, 1300.0, 1380.0, 1465.0, 1550.0, 1630.0, 1715.0]),
            (220, &[1275.0, 1325.0, 1415.0, 1500.0, 1585.0, 1670.0, 1755.0]),
            (250, &[1320.0, 1370.0, 1460.0, 1550.0, 1640.0, 1725.0, 1815.0]),
            (275, &[1355.0, 1410.0, 1500.0, 1590.0, 1680.0, 1775.0, 1865.0]),
            (300, &[1390.0, 1445.0, 1540.0, 1635.0, 1725.0, 1820.0, 1915.0]),
        ],
    )
}

/// Cassette 732 awning prices (projection x width).
fn cassette_732() -> PriceTable {
    PriceTable::from_sheet(
        &[250, 300, 350, 400, 450, 500, 550, 600],
        &[
            (200, &[1610.0, 1710.0, 1810.0, 1910.0, 2010.0, 2110.0, 2210.0, 2310.0]),
            (250, &[1700.0, 1805.0, 1910.0, 2020.0, 2125.0, 2230.0, 2335.0, 2440.0]),
            (300, &[1790.0, 1900.0, 2010.0, 2125.0, 2240.0, 2350.0, 2460.0, 2575.0]),
            (350, &[1875.0, 1995.0, 2115.0, 2230.0, 2350.0, 2470.0, 2590.0]),
        ],
    )
}

/// Epica awning prices (projection x width).
fn epica() -> PriceTable {
    PriceTable::from_sheet(
        &[350, 400, 450, 500, 550, 600, 650, 700],
        &[
            (200, &[2370.0, 2485.0, 2595.0, 2710.0, 2825.0, 2935.0, 3050.0, 3160.0]),
            (220, &[2415.0, 2530.0, 2650.0, 2765.0, 2880.0, 2995.0, 3110.0, 3225.0]),
            (250, &[2485.0, 2605.0, 2725.0, 2845.0, 2965.0, 3085.0, 3205.0, 3325.0]),
            (275, &[2540.0, 2665.0, 2790.0, 2910.0, 3035.0, 3160.0, 3285.0, 3405.0]),
            (300, &[2600.0, 2725.0, 2855.0, 2980.0, 3105.0, 3235.0, 3360.0, 3490.0]),
            (325, &[2655.0, 2785.0, 2915.0, 3050.0, 3180.0, 3310.0, 3440.0, 3570.0]),
            (350, &[2715.0, 2845.0, 2980.0, 3115.0, 3250.0, 3385.0, 3515.0, 3650.0]),
        ],
    )
}

/// Zip screen prices (height x width).
fn zip_screen() -> PriceTable {
    PriceTable::from_sheet(
        &[200, 250, 300, 350, 400],
        &[
            (175, &[965.0, 1035.0, 1110.0, 1185.0, 1255.0]),
            (200, &[995.0, 1070.0, 1150.0, 1225.0, 1300.0]),
            (225, &[1030.0, 1110.0, 1190.0, 1270.0, 1345.0]),
            (250, &[1060.0, 1145.0, 1230.0, 1310.0, 1390.0]),
            (275, &[1095.0, 1180.0, 1265.0, 1350.0, 1440.0]),
            (300, &[1130.0, 1220.0, 1305.0, 1395.0, 1485.0]),
            (325, &[1160.0, 1255.0, 1345.0, 1435.0, 1530.0]),
            (350, &[1195.0, 1290.0, 1385.0, 1480.0, 1575.0]),
        ],
    )
}

/// Vertical cassette Φ10 prices (height x width).
fn cassette_phi10() -> PriceTable {
    PriceTable::from_sheet(
        &[100, 125, 150, 175, 200, 225, 250, 275, 300],
        &[
            (150, &[3525.0, 3570.0, 3620.0, 3670.0, 3715.0, 3765.0, 3810.0, 3860.0, 3910.0]),
            (200, &[3595.0, 3645.0, 3695.0, 3745.0, 3800.0, 3850.0, 3900.0, 3950.0, 4000.0]),
            (250, &[3665.0, 3720.0, 3770.0, 3825.0, 3880.0, 3935.0, 3990.0, 4040.0, 4095.0]),
            (300, &[3735.0, 3790.0, 3850.0, 3905.0, 3960.0, 4020.0, 4075.0, 4130.0, 4190.0]),
        ],
    )
}

/// Wire-guided vertical cabrio prices (height x width).
fn wire_cabrio() -> PriceTable {
    PriceTable::from_sheet(
        &[100, 125, 150, 175, 200, 225, 250, 275, 300],
        &[
            (150, &[3785.0, 3840.0, 3890.0, 3945.0, 3995.0, 4050.0, 4100.0, 4155.0, 4210.0]),
            (200, &[3865.0, 3920.0, 3975.0, 4030.0, 4085.0, 4140.0, 4200.0, 4255.0, 4310.0]),
            (250, &[3940.0, 4000.0, 4060.0, 4115.0, 4175.0, 4235.0, 4290.0, 4350.0, 4410.0]),
            (300, &[4015.0, 4080.0, 4140.0, 4200.0, 4265.0, 4325.0, 4390.0, 4450.0, 4510.0]),
        ],
    )
}

/// Vertical VT screen prices (height x width).
fn vertical_vt() -> PriceTable {
    PriceTable::from_sheet(
        &[100, 125, 150, 175, 200, 225, 250, 275, 300],
        &[
            (150, &[635.0, 670.0, 700.0, 730.0, 760.0, 790.0, 820.0, 850.0, 880.0]),
            (200, &[680.0, 715.0, 745.0, 780.0, 810.0, 845.0, 880.0, 910.0, 945.0]),
            (250, &[725.0, 760.0, 795.0, 830.0, 865.0, 900.0, 935.0, 970.0, 1005.0]),
            (300, &[770.0, 805.0, 845.0, 880.0, 920.0, 955.0, 990.0, 1030.0, 1065.0]),
        ],
    )
}

/// Lux parapet prices by rounded width.
fn parapet_lux() -> WidthPrices {
    [
        (200, 370.0),
        (250, 420.0),
        (300, 465.0),
        (350, 510.0),
        (400, 560.0),
        (450, 610.0),
        (500, 655.0),
        (550, 700.0),
        (600, 750.0),
        (650, 800.0),
        (700, 845.0),
        (750, 890.0),
        (800, 940.0),
        (850, 990.0),
        (900, 1035.0),
        (950, 1080.0),
        (1000, 1130.0),
        (1050, 1180.0),
        (1100, 1225.0),
        (1150, 1270.0),
        (1200, 1320.0),
        (1250, 1370.0),
        (1300, 1415.0),
        (1350, 1460.0),
        (1400, 1510.0),
        (1450, 1560.0),
        (1500, 1605.0),
    ]
    .into_iter()
    .collect()
}

/// Panel parapet prices by rounded width.
fn parapet_panel() -> WidthPrices {
    [
        (200, 300.0),
        (250, 340.0),
        (300, 380.0),
        (350, 420.0),
        (400, 460.0),
        (450, 500.0),
        (500, 540.0),
        (550, 580.0),
        (600, 620.0),
        (650, 660.0),
        (700, 700.0),
        (750, 740.0),
        (800, 780.0),
        (850, 820.0),
        (900, 860.0),
        (950, 900.0),
        (1000, 940.0),
        (1050, 980.0),
        (1100, 1020.0),
        (1150, 1060.0),
        (1200, 1100.0),
        (1250, 1140.0),
        (1300, 1180.0),
        (1350, 1220.0),
        (1400, 1260.0),
        (1450, 1300.0),
        (1500, 1340.0),
    ]
    .into_iter()
    .collect()
}

