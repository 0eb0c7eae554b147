//! World Manufacturer Identifier table.
//!
//! 2- and 3-character WMI prefixes mapped to manufacturer display names
//! (436 entries). Sorted by key for binary search.

pub(super) static WORLD_MANUFACTURERS: &[(&str, &str)] = &[
    ("1B3", "Dodge"),
    ("1C3", "Chrysler"),
    ("1C6", "Chrysler"),
    ("1D3", "Dodge"),
    ("1F9", "FWD Corp."),
    ("1FA", "Ford Motor Company"),
    ("1FB", "Ford Motor Company"),
    ("1FC", "Ford Motor Company"),
    ("1FD", "Ford Motor Company"),
    ("1FM", "Ford Motor Company"),
    ("1FT", "Ford Motor Company"),
    ("1FU", "Freightliner"),
    ("1FV", "Freightliner"),
    ("1G", "General Motors USA"),
    ("1G1", "Chevrolet USA"),
    ("1G2", "Pontiac USA"),
    ("1G3", "Oldsmobile USA"),
    ("1G4", "Buick USA"),
    ("1G6", "Cadillac USA"),
    ("1G8", "Saturn USA"),
    ("1GC", "Chevrolet Truck USA"),
    ("1GM", "Pontiac USA"),
    ("1GT", "GMC Truck USA"),
    ("1GY", "Cadillac USA"),
    ("1H", "Honda USA"),
    ("1HD", "Harley-Davidson"),
    ("1J4", "Jeep"),
    ("1L", "Lincoln USA"),
    ("1M1", "Mack Truck USA"),
    ("1M2", "Mack Truck USA"),
    ("1M3", "Mack Truck USA"),
    ("1M4", "Mack Truck USA"),
    ("1M9", "Mynatt Truck & Equipment"),
    ("1ME", "Mercury USA"),
    ("1N", "Nissan USA"),
    ("1NX", "NUMMI USA"),
    ("1P3", "Plymouth USA"),
    ("1R9", "Roadrunner Hay Squeeze USA"),
    ("1VW", "Volkswagen USA"),
    ("1XK", "Kenworth USA"),
    ("1XP", "Peterbilt USA"),
    ("1YV", "Mazda USA (AutoAlliance International)"),
    ("1ZV", "Ford (AutoAlliance International)"),
    ("2A4", "Chrysler Canada"),
    ("2B3", "Dodge Canada"),
    ("2B7", "Dodge Canada"),
    ("2C3", "Chrysler Canada"),
    ("2CN", "CAMI"),
    ("2D3", "Dodge Canada"),
    ("2FA", "Ford Motor Company Canada"),
    ("2FB", "Ford Motor Company Canada"),
    ("2FC", "Ford Motor Company Canada"),
    ("2FM", "Ford Motor Company Canada"),
    ("2FT", "Ford Motor Company Canada"),
    ("2FU", "Freightliner"),
    ("2FV", "Freightliner"),
    ("2FZ", "Sterling"),
    ("2G", "General Motors Canada"),
    ("2G1", "Chevrolet Canada"),
    ("2G2", "Pontiac Canada"),
    ("2G3", "Oldsmobile Canada"),
    ("2G4", "Buick Canada"),
    ("2HG", "Honda Canada"),
    ("2HJ", "Honda Canada"),
    ("2HK", "Honda Canada"),
    ("2HM", "Hyundai Canada"),
    ("2M", "Mercury"),
    ("2NV", "Nova Bus Canada"),
    ("2P3", "Plymouth Canada"),
    ("2T", "Toyota Canada"),
    ("2V4", "Volkswagen Canada"),
    ("2V8", "Volkswagen Canada"),
    ("2WK", "Western Star"),
    ("2WL", "Western Star"),
    ("2WM", "Western Star"),
    ("3C4", "Chrysler Mexico"),
    ("3D3", "Dodge Mexico"),
    ("3FA", "Ford Motor Company Mexico"),
    ("3FE", "Ford Motor Company Mexico"),
    ("3G", "General Motors Mexico"),
    ("3H", "Honda Mexico"),
    ("3JB", "BRP Mexico (all-terrain vehicles)"),
    ("3MZ", "Mazda Mexico"),
    ("3N", "Nissan Mexico"),
    ("3P3", "Plymouth Mexico"),
    ("3VW", "Volkswagen Mexico"),
    ("4F", "Mazda USA"),
    ("4JG", "Mercedes-Benz USA"),
    ("4M", "Mercury"),
    ("4RK", "Nova Bus USA"),
    ("4S", "Subaru-Isuzu Automotive"),
    ("4T", "Toyota"),
    ("4T9", "Lumen Motors (zero-emission mid-engined car)"),
    ("4UF", "Arctic Cat Inc."),
    ("4US", "BMW USA"),
    ("4UZ", "Frt-Thomas Bus"),
    ("4V1", "Volvo"),
    ("4V2", "Volvo"),
    ("4V3", "Volvo"),
    ("4V4", "Volvo"),
    ("4V5", "Volvo"),
    ("4V6", "Volvo"),
    ("4VL", "Volvo"),
    ("4VM", "Volvo"),
    ("4VZ", "Volvo"),
    ("538", "Zero Motorcycles (USA)"),
    ("5F", "Honda USA-Alabama"),
    ("5L", "Lincoln"),
    ("5N1", "Nissan USA"),
    ("5NP", "Hyundai USA"),
    ("5T", "Toyota USA - trucks"),
    ("5YJ", "Tesla Motors"),
    ("6AB", "MAN Australia"),
    ("6F4", "Nissan Motor Company Australia"),
    ("6F5", "Kenworth Australia"),
    ("6FP", "Ford Motor Company Australia"),
    ("6G1", "General Motors-Holden (post Nov 2002)"),
    ("6G2", "Pontiac Australia (GTO & G8)"),
    ("6H8", "General Motors-Holden (pre Nov 2002)"),
    ("6MM", "Mitsubishi Motors Australia"),
    ("6T1", "Toyota Motor Corporation Australia"),
    ("6U9", "Privately Imported car in Australia"),
    ("8A1", "Renault Argentina"),
    ("8AD", "Peugeot Argentina"),
    ("8AF", "Ford Motor Company Argentina"),
    ("8AG", "Chevrolet Argentina"),
    ("8AJ", "Toyota Argentina"),
    ("8AK", "Suzuki Argentina"),
    ("8AP", "Fiat Argentina"),
    ("8AW", "Volkswagen Argentina"),
    ("8GD", "Peugeot Chile"),
    ("8GG", "Chevrolet Chile"),
    ("935", "Citroën Brazil"),
    ("936", "Peugeot Brazil"),
    ("93H", "Honda Brazil"),
    ("93R", "Toyota Brazil"),
    ("93U", "Audi Brazil"),
    ("93V", "Audi Brazil"),
    ("93X", "Mitsubishi Motors Brazil"),
    ("93Y", "Renault Brazil"),
    ("94D", "Nissan Brazil"),
    ("9BD", "Fiat Brazil"),
    ("9BF", "Ford Motor Company Brazil"),
    ("9BG", "Chevrolet Brazil"),
    ("9BM", "Mercedes-Benz Brazil"),
    ("9BR", "Toyota Brazil"),
    ("9BS", "Scania Brazil"),
    ("9BW", "Volkswagen Brazil"),
    ("9FB", "Renault Colombia"),
    ("AAV", "Volkswagen South Africa"),
    ("AC5", "Hyundai South Africa"),
    ("ADD", "Hyundai South Africa"),
    ("AFA", "Ford South Africa"),
    ("AHT", "Toyota South Africa"),
    ("JA", "Isuzu"),
    ("JA3", "Mitsubishi"),
    ("JA4", "Mitsubishi"),
    ("JD", "Daihatsu"),
    ("JF", "Fuji Heavy Industries (Subaru)"),
    ("JH", "Honda"),
    ("JK", "Kawasaki (motorcycles)"),
    ("JL5", "Mitsubishi Fuso"),
    ("JMB", "Mitsubishi Motors"),
    ("JMY", "Mitsubishi Motors"),
    ("JMZ", "Mazda"),
    ("JN", "Nissan"),
    ("JS", "Suzuki"),
    ("JT", "Toyota"),
    ("JY", "Yamaha (motorcycles)"),
    ("KL", "Daewoo General Motors South Korea"),
    ("KM", "Hyundai"),
    ("KM1", "Hyosung (motorcycles)"),
    ("KMY", "Daelim (motorcycles)"),
    ("KN", "Kia"),
    ("KNM", "Renault Samsung"),
    ("KPA", "SsangYong"),
    ("KPT", "SsangYong"),
    ("L4B", "Xingyue Group (motorcycles)"),
    ("L5C", "KangDi (ATV)"),
    ("L5K", "Zhejiang Yongkang Easy Vehicle"),
    ("L5N", "Zhejiang Taotao, China (ATV & motorcycles)"),
    ("L5Y", "Merato Motorcycle Taizhou Zhongneng"),
    ("L85", "Zhejiang Yongkang Huabao Electric Appliance"),
    ("L8X", "Zhejiang Summit Huawin Motorcycle"),
    ("LAN", "Changzhou Yamasaki Motorcycle"),
    ("LB2", "Geely Motorcycles"),
    ("LBB", "Zhejiang Qianjiang Motorcycle (Keeway/Generic)"),
    ("LBE", "Beijing Hyundai"),
    ("LBM", "Zongshen Piaggio"),
    ("LBP", "Chongqing Jainshe Yamaha (motorcycles)"),
    ("LCE", "Hangzhou Chunfeng Motorcycles (CFMOTO)"),
    ("LDC", "Dong Feng Peugeot Citroen (DPCA), China"),
    ("LDD", "Dandong Huanghai Automobile"),
    ("LDN", "SouEast Motor"),
    ("LDY", "Zhongtong Coach, China"),
    ("LE4", "Beijing Benz, China"),
    ("LET", "Jiangling-Isuzu Motors, China"),
    ("LFB", "FAW, China (busses)"),
    ("LFG", "Taizhou Chuanl Motorcycle Manufacturing"),
    ("LFP", "FAW, China (passenger vehicles)"),
    ("LFT", "FAW, China (trailers)"),
    ("LFV", "FAW-Volkswagen, China"),
    ("LFW", "FAW JieFang, China"),
    ("LFY", "Changshu Light Motorcycle Factory"),
    ("LGB", "Dong Feng (DFM), China"),
    ("LGH", "Qoros (formerly Dong Feng (DFM)), China"),
    ("LGX", "BYD Auto, China"),
    ("LH1", "FAW-Haima, China"),
    ("LHB", "Beijing Automotive Industry Holding"),
    ("LJ1", "JAC, China"),
    ("LJC", "JAC, China"),
    ("LKL", "Suzhou King Long, China"),
    ("LL6", "Hunan Changfeng Manufacture Joint-Stock"),
    ("LL8", "Linhai (ATV)"),
    ("LMC", "Suzuki Hong Kong (motorcycles)"),
    ("LPR", "Yamaha Hong Kong (motorcycles)"),
    ("LSG", "Shanghai General Motors, China"),
    ("LSJ", "MG Motor UK Limited - SAIC Motor, Shanghai, China"),
    ("LSV", "Shanghai Volkswagen, China"),
    ("LSY", "Brilliance Zhonghua"),
    ("LTV", "Toyota Tian Jin"),
    ("LUC", "Guangqi Honda, China"),
    ("LVS", "Ford Chang An"),
    ("LVV", "Chery, China"),
    ("LVZ", "Dong Feng Sokon Motor Company (DFSK)"),
    ("LZE", "Isuzu Guangzhou, China"),
    ("LZG", "Shaanxi Automobile Group, China"),
    ("LZM", "MAN China"),
    ("LZP", "Zhongshan Guochi Motorcycle (Baotian)"),
    ("LZY", "Yutong Zhengzhou, China"),
    ("LZZ", "Chongqing Shuangzing Mech & Elec (Howo)"),
    ("MA1", "Mahindra & Mahindra"),
    ("MA3", "Suzuki India (Maruti)"),
    ("MA6", "GM India"),
    ("MA7", "Mitsubishi India (formerly Honda)"),
    ("MAB", "Mahindra & Mahindra"),
    ("MAC", "Mahindra & Mahindra"),
    ("MAJ", "Ford India"),
    ("MAK", "Honda Siel Cars India"),
    ("MAL", "Hyundai"),
    ("MAT", "Tata Motors"),
    ("MB1", "Ashok Leyland"),
    ("MBH", "Suzuki India (Maruti)"),
    ("MBJ", "Toyota India"),
    ("MBR", "Mercedes-Benz India"),
    ("MC2", "Volvo Eicher commercial vehicles limited."),
    ("MCA", "Fiat India"),
    ("MCB", "GM India"),
    ("MD2", "Bajaj Auto"),
    ("MDH", "Nissan India"),
    ("MEE", "Renault India"),
    ("MEX", "Volkswagen India"),
    ("MHF", "Toyota Indonesia"),
    ("MHR", "Honda Indonesia"),
    ("MLC", "Suzuki Thailand"),
    ("MLH", "Honda Thailand"),
    ("MM8", "Mazda Thailand"),
    ("MMB", "Mitsubishi Thailand"),
    ("MMC", "Mitsubishi Thailand"),
    ("MMM", "Chevrolet Thailand"),
    ("MMT", "Mitsubishi Thailand"),
    ("MNB", "Ford Thailand"),
    ("MNT", "Nissan Thailand"),
    ("MP1", "Isuzu Thailand"),
    ("MPA", "Isuzu Thailand"),
    ("MR0", "Toyota Thailand"),
    ("MRH", "Honda Thailand"),
    ("NLA", "Honda Türkiye"),
    ("NLE", "Mercedes-Benz Türk Truck"),
    ("NLH", "Hyundai Assan"),
    ("NM0", "Ford Turkey"),
    ("NM4", "Tofaş Türk"),
    ("NMT", "Toyota Türkiye"),
    ("PE1", "Ford Phillipines"),
    ("PE3", "Mazda Phillipines"),
    ("PL1", "Proton, Malaysia"),
    ("PNA", "NAZA, Malaysia (Peugeot)"),
    ("RF3", "Aeon Motor, Taiwan"),
    ("RFB", "Kymco, Taiwan"),
    ("RFG", "Sanyang SYM, Taiwan"),
    ("RFL", "Adly, Taiwan"),
    ("RFT", "CPI, Taiwan"),
    ("SAJ", "Jaguar"),
    ("SAL", "Land Rover"),
    ("SAR", "Rover"),
    ("SB1", "Toyota UK"),
    ("SBM", "McLaren"),
    ("SCA", "Rolls Royce"),
    ("SCB", "Bentley"),
    ("SCC", "Lotus Cars"),
    ("SCE", "DeLorean Motor Cars N. Ireland (UK)"),
    ("SCF", "Aston"),
    ("SDB", "Peugeot UK (formerly Talbot)"),
    ("SED", "General Motors Luton Plant"),
    ("SEY", "LDV"),
    ("SFA", "Ford UK"),
    ("SFD", "Alexander Dennis UK"),
    ("SHH", "Honda UK"),
    ("SHS", "Honda UK"),
    ("SJN", "Nissan UK"),
    ("SKF", "Vauxhall"),
    ("SLP", "JCB Research UK"),
    ("SMT", "Triumph Motorcycles"),
    ("SUF", "Fiat Auto Poland"),
    ("SUL", "FSC (Poland)"),
    ("SUP", "FSO-Daewoo (Poland)"),
    ("SUU", "Solaris Bus & Coach (Poland)"),
    ("TCC", "Micro Compact Car AG (smart 1998-1999)"),
    ("TDM", "QUANTYA Swiss Electric Movement (Switzerland)"),
    ("TM9", "Škoda trolleybuses (Czech Republic)"),
    ("TMA", "Hyundai Motor Manufacturing Czech"),
    ("TMB", "Škoda (Czech Republic)"),
    ("TMK", "Karosa (Czech Republic)"),
    ("TMP", "Škoda trolleybuses (Czech Republic)"),
    ("TMT", "Tatra (Czech Republic)"),
    ("TN9", "Karosa (Czech Republic)"),
    ("TNE", "TAZ"),
    ("TRA", "Ikarus Bus"),
    ("TRU", "Audi Hungary"),
    ("TSE", "Ikarus Egyedi Autobuszgyar, (Hungary)"),
    ("TSM", "Suzuki Hungary"),
    ("TW1", "Toyota Caetano Portugal"),
    ("TYA", "Mitsubishi Trucks Portugal"),
    ("TYB", "Mitsubishi Trucks Portugal"),
    ("U5Y", "Kia Motors Slovakia"),
    ("U6Y", "Kia Motors Slovakia"),
    ("UU1", "Renault Dacia, (Romania)"),
    ("UU3", "ARO"),
    ("UU6", "Daewoo Romania"),
    ("VAG", "Magna Steyr Puch"),
    ("VAN", "MAN Austria"),
    ("VBK", "KTM (Motorcycles)"),
    ("VF1", "Renault"),
    ("VF2", "Renault"),
    ("VF3", "Peugeot"),
    ("VF4", "Talbot"),
    ("VF6", "Renault (Trucks & Buses)"),
    ("VF7", "Citroën"),
    ("VF8", "Matra"),
    ("VG5", "MBK (motorcycles)"),
    ("VLU", "Scania France"),
    ("VN1", "SOVAB (France)"),
    ("VNE", "Irisbus (France)"),
    ("VNK", "Toyota France"),
    ("VNV", "Renault-Nissan"),
    ("VS6", "Ford Spain"),
    ("VS7", "Citroën Spain"),
    ("VS9", "Carrocerias Ayats (Spain)"),
    ("VSA", "Mercedes-Benz Spain"),
    ("VSE", "Suzuki Spain (Santana Motors)"),
    ("VSK", "Nissan Spain"),
    ("VSS", "SEAT"),
    ("VSX", "Opel Spain"),
    ("VTH", "Derbi (motorcycles)"),
    ("VTT", "Suzuki Spain (motorcycles)"),
    ("VV9", "TAURO Spain"),
    ("VWA", "Nissan Spain"),
    ("VWV", "Volkswagen Spain"),
    ("VX1", "Zastava / Yugo Serbia"),
    ("W0L", "Opel"),
    ("WA1", "Audi SUV"),
    ("WAG", "Neoplan"),
    ("WAU", "Audi"),
    ("WBA", "BMW"),
    ("WBS", "BMW M"),
    ("WDA", "Daimler"),
    ("WDB", "Mercedes-Benz"),
    ("WDC", "DaimlerChrysler"),
    ("WDD", "Mercedes-Benz"),
    ("WDF", "Mercedes-Benz (commercial vehicles)"),
    ("WEB", "Evobus GmbH (Mercedes-Bus)"),
    ("WF0", "Ford Germany"),
    ("WJM", "Iveco Magirus"),
    ("WMA", "MAN Germany"),
    ("WME", "smart"),
    ("WMW", "MINI"),
    ("WMX", "Mercedes-AMG"),
    ("WP0", "Porsche"),
    ("WP1", "Porsche SUV"),
    ("WUA", "quattro GmbH"),
    ("WV1", "Volkswagen Commercial Vehicles"),
    ("WV2", "Volkswagen Bus/Van"),
    ("WV3", "Volkswagen Trucks"),
    ("WVG", "Volkswagen MPV/SUV"),
    ("WVW", "Volkswagen"),
    ("X4X", "AvtoTor (Russia, BMW SKD)"),
    ("X7L", "Renault AvtoFramos (Russia)"),
    ("X7M", "Hyundai TagAZ (Russia)"),
    ("XLB", "Volvo (NedCar)"),
    ("XLE", "Scania Netherlands"),
    ("XLR", "DAF (trucks)"),
    ("XMC", "Mitsubishi (NedCar)"),
    ("XTA", "Lada/AutoVaz (Russia)"),
    ("XTT", "UAZ/Sollers (Russia)"),
    ("XUF", "General Motors Russia"),
    ("XUU", "AvtoTor (Russia, General Motors SKD)"),
    ("XW8", "Volkswagen Group Russia"),
    ("XWB", "UZ-Daewoo (Uzbekistan)"),
    ("XWE", "AvtoTor (Russia, Hyundai-Kia SKD)"),
    ("Y6D", "Zaporozhets/AvtoZAZ (Ukraine)"),
    ("YBW", "Volkswagen Belgium"),
    ("YCM", "Mazda Belgium"),
    ("YE2", "Van Hool (buses)"),
    ("YK1", "Saab-Valmet Finland"),
    ("YS2", "Scania AB"),
    ("YS3", "Saab"),
    ("YS4", "Scania Bus"),
    ("YTN", "Saab NEVS"),
    ("YU7", "Husaberg (motorcycles)"),
    ("YV1", "Volvo Cars"),
    ("YV2", "Volvo Trucks"),
    ("YV3", "Volvo Buses"),
    ("YV4", "Volvo Cars"),
    ("Z8M", "Marussia (Russia)"),
    ("ZAA", "Autobianchi"),
    ("ZAM", "Maserati"),
    ("ZAP", "Piaggio/Vespa/Gilera"),
    ("ZAR", "Alfa Romeo"),
    ("ZBN", "Benelli"),
    ("ZCF", "Iveco"),
    ("ZCG", "Cagiva SpA / MV Agusta"),
    ("ZD0", "Yamaha Italy"),
    ("ZD3", "Beta Motor"),
    ("ZD4", "Aprilia"),
    ("ZDF", "Ferrari Dino"),
    ("ZDM", "Ducati Motor Holdings SpA"),
    ("ZFA", "Fiat"),
    ("ZFC", "Fiat V.I."),
    ("ZFF", "Ferrari"),
    ("ZGU", "Moto Guzzi"),
    ("ZHW", "Lamborghini"),
    ("ZJM", "Malaguti"),
    ("ZJN", "Innocenti"),
    ("ZKH", "Husqvarna Motorcycles Italy"),
    ("ZLA", "Lancia"),
    ("ZOM", "OM"),
];
