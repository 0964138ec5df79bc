use crate::model::Location;

/// Bundled snapshot of the sinoptik.bg directory of Bulgarian locations.
///
/// Regenerate with `tron locations refresh`; duplicate names are kept in
/// directory order.
pub(super) const BUNDLED: &[(&str, &str)] = &[
    ("Аврен", "avren-bulgaria-100733587"),
    ("Айтос", "aytos-bulgaria-100733579"),
    ("Аксаково", "aksakovo-bulgaria-100733716"),
    ("Албена", "albena-bulgaria-100733702"),
    ("Алфатар", "alfatar-bulgaria-100733679"),
    ("Антон", "anton-bulgaria-100733660"),
    ("Антоново", "antonovo-bulgaria-100733657"),
    ("Априлци", "apriltsi-bulgaria-100733649"),
    ("Ардино", "ardino-bulgaria-100733638"),
    ("Асеновград", "asenovgrad-bulgaria-100733618"),
    ("Ахтопол", "akhtopol-bulgaria-100733722"),
    ("Балчик", "balchik-bulgaria-100733515"),
    ("Баните", "banite-bulgaria-100733474"),
    ("Банско", "bansko-bulgaria-100733462"),
    ("Батак", "batak-bulgaria-100733433"),
    ("Батановци", "batanovtsi-bulgaria-100726489"),
    ("Безбог", "bezbog-bulgaria-307000001"),
    ("Белене", "belene-bulgaria-100733359"),
    ("Белица", "belitsa-bulgaria-100733322"),
    ("Белмекен", "belmeken-bulgaria-307000004"),
    ("Белово", "belovo-bulgaria-100733286"),
    ("Белоградчик", "belogradchik-bulgaria-100733309"),
    ("Белослав", "beloslav-bulgaria-100725213"),
    ("Берковица", "berkovitsa-bulgaria-100733264"),
    ("Благоевград", "blagoevgrad-bulgaria-100733191"),
    ("Бобовдол", "bobovdol-bulgaria-100733151"),
    ("Бобошево", "boboshevo-bulgaria-100733153"),
    ("Божурище", "bozhurishte-bulgaria-100732954"),
    ("Бойница", "boynitsa-bulgaria-100732973"),
    ("Бойчиновци", "boychinovtsi-bulgaria-100732986"),
    ("Болярово", "bolyarovo-bulgaria-100733092"),
    ("Борино", "borino-bulgaria-100733067"),
    ("Борован", "borovan-bulgaria-100733058"),
    ("Боровец", "borovets-bulgaria-100733055"),
    ("Борово", "borovo-bulgaria-100733043"),
    ("Ботевград", "botevgrad-bulgaria-100733014"),
    ("Братя Даскалови", "bratya-daskalovi-bulgaria-100732920"),
    ("Брацигово", "bratsigovo-bulgaria-100732924"),
    ("Брегово", "bregovo-bulgaria-100732915"),
    ("Брезник", "breznik-bulgaria-100732883"),
    ("Брезово", "brezovo-bulgaria-100732874"),
    ("Брусарци", "brusartsi-bulgaria-100732862"),
    ("Бургас", "burgas-bulgaria-100732770"),
    ("Бухово", "bukhovo-bulgaria-100732825"),
    ("Бяла", "byala-bulgaria-100732720"),
    ("Бяла", "byala-bulgaria-100732721"),
    ("Бяла Слатина", "byala-slatina-bulgaria-100732704"),
    ("Бяла Черква", "byala-cherkva-bulgaria-100732717"),
    ("Варвара", "varvara-bulgaria-307000007"),
    ("Варна", "varna-bulgaria-100726050"),
    ("Велики Преслав", "veliki-preslav-bulgaria-100727987"),
    ("Велико Търново", "veliko-turnovo-bulgaria-100725993"),
    ("Велинград", "velingrad-bulgaria-100725988"),
    ("Венец", "venets-bulgaria-100725967"),
    ("Ветово", "vetovo-bulgaria-100725935"),
    ("Ветрино", "vetrino-bulgaria-100725924"),
    ("Видин", "vidin-bulgaria-100725905"),
    ("Вихрен", "vihren-bulgaria-307000008"),
    ("Враца", "vratsa-bulgaria-100725712"),
    ("Вълчедръм", "vulchedrum-bulgaria-100725683"),
    ("Вълчидол", "vulchidol-bulgaria-100725679"),
    ("Върбица", "vurbitsa-bulgaria-100725649"),
    ("Вършец", "vurshets-bulgaria-100725623"),
    ("Габрово", "gabrovo-bulgaria-100731549"),
    ("Гара Хитрино", "gara-khitrino-bulgaria-100731520"),
    ("Генерал Тошево", "general-toshevo-bulgaria-100731464"),
    ("Георги-Дамяново", "georgi-damyanovo-bulgaria-100731458"),
    ("Главиница", "glavinitsa-bulgaria-100731415"),
    ("Годеч", "godech-bulgaria-100731384"),
    ("Горна Малина", "gorna-malina-bulgaria-100731239"),
    ("Горна Оряховица", "gorna-oryahovitsa-bulgaria-100731233"),
    ("Гоце Делчев", "gotse-delchev-bulgaria-100731108"),
    ("Грамада", "gramada-bulgaria-100731056"),
    ("Гулянци", "gulyantsi-bulgaria-100730982"),
    ("Гурково", "gurkovo-bulgaria-100730969"),
    ("Гърмен", "gurmen-bulgaria-100730960"),
    ("Две могили", "dve-mogili-bulgaria-100731771"),
    ("Дебелец", "debelets-bulgaria-100732359"),
    ("Девин", "devin-bulgaria-100732285"),
    ("Девня", "devnya-bulgaria-100732280"),
    ("Джебел", "dzhebel-bulgaria-100731741"),
    ("Димитровград", "dimitrovgrad-bulgaria-100732263"),
    ("Димово", "dimovo-bulgaria-100732253"),
    ("Добринище", "dobrinishte-bulgaria-307000009"),
    ("Добрич", "dobrich-bulgaria-100726418"),
    ("Долна Баня", "dolna-banya-bulgaria-100732145"),
    ("Долна Митрополия", "dolna-mitropoliya-bulgaria-100732122"),
    ("Долни Дъбник", "dolni-dubnik-bulgaria-100732099"),
    ("Долни чифлик", "dolni-chiflik-bulgaria-100731453"),
    ("Долно Камарци", "dolno-kamarci-bulgaria-307000010"),
    ("Доспат", "dospat-bulgaria-100732015"),
    ("Драгоман", "dragoman-bulgaria-100731961"),
    ("Дряново", "dryanovo-bulgaria-100731882"),
    ("Дулово", "dulovo-bulgaria-100731818"),
    ("Дунавци", "dunavtsi-bulgaria-100731809"),
    ("Дупница", "dupnitsa-bulgaria-100726872"),
    ("Дуранкулак", "durankulak-bulgaria-100731803"),
    ("Дългопол", "dulgopol-bulgaria-100731822"),
    ("Елена", "elena-bulgaria-100731696"),
    ("Елин Пелин", "elin-pelin-bulgaria-100731675"),
    ("Елхово", "elkhovo-bulgaria-100731670"),
    ("Емона", "emona-bulgaria-100731653"),
    ("Етрополе", "etropole-bulgaria-100731626"),
    ("Завет", "zavet-bulgaria-100725435"),
    ("Земен", "zemen-bulgaria-100725402"),
    ("Златарица", "zlataritsa-bulgaria-100725295"),
    ("Златица", "zlatitsa-bulgaria-100725283"),
    ("Златни пясъци", "golden-sands-bulgaria-106355004"),
    ("Златоград", "zlatograd-bulgaria-100725271"),
    ("Ивайловград", "ivaylovgrad-bulgaria-100730837"),
    ("Иваново", "ivanovo-bulgaria-100730852"),
    ("Иракли", "irakli-bulgaria-307000002"),
    ("Искър", "iskur-bulgaria-100728348"),
    ("Исперих", "isperikh-bulgaria-100730866"),
    ("Ихтиман", "ikhtiman-bulgaria-100730919"),
    ("Каварна", "kavarna-bulgaria-100730518"),
    ("Казанлък", "kazanlak-bulgaria-100730496"),
    ("Кайнарджа", "kaynardzha-bulgaria-100730504"),
    ("Калофер", "kalofer-bulgaria-100730744"),
    ("Калояново", "kaloyanovo-bulgaria-100730733"),
    ("Камено", "kameno-bulgaria-100730680"),
    ("Каолиново", "kaolinovo-bulgaria-100730651"),
    ("Карлово", "karlovo-bulgaria-100730565"),
    ("Карнобат", "karnobat-bulgaria-100730559"),
    ("Каспичан", "kaspichan-bulgaria-100730542"),
    ("Кермен", "kermen-bulgaria-100730478"),
    ("Килифарево", "kilifarevo-bulgaria-100730367"),
    ("Кирково", "kirkovo-bulgaria-100730355"),
    ("Китен", "kiten-bulgaria-100730338"),
    ("Клисура", "klisura-bulgaria-100730301"),
    ("Кнежа", "knezha-bulgaria-100730287"),
    ("Ковачевци", "kovachevtsi-bulgaria-100730051"),
    ("Козлодуй", "kozloduy-bulgaria-100730013"),
    ("Койнаре", "koynare-bulgaria-100730040"),
    ("Копривщица", "koprivshtitsa-bulgaria-100730159"),
    ("Костинброд", "kostinbrod-bulgaria-100730084"),
    ("Котел", "kotel-bulgaria-100730073"),
    ("Кочериново", "kocherinovo-bulgaria-100730268"),
    ("Кранево", "kranevo-bulgaria-100729984"),
    ("Кресна", "kresna-bulgaria-100729942"),
    ("Криводол", "krivodol-bulgaria-100729909"),
    ("Кричим", "krichim-bulgaria-100729936"),
    ("Крумовград", "krumovgrad-bulgaria-100729896"),
    ("Крушари", "krushari-bulgaria-100729880"),
    ("Кубрат", "kubrat-bulgaria-100729839"),
    ("Кула", "kula-bulgaria-100729825"),
    ("Кърджали", "kardzhali-bulgaria-100729794"),
    ("Кюстендил", "kyustendil-bulgaria-100729730"),
    ("Левски", "levski-bulgaria-100729636"),
    ("Лесичево", "lesichevo-bulgaria-100729667"),
    ("Летница", "letnitsa-bulgaria-100729646"),
    ("Ловеч", "lovech-bulgaria-100729559"),
    ("Лозенец", "lozenets-bulgaria-100729541"),
    ("Лозница", "loznitsa-bulgaria-100729530"),
    ("Лом", "lom-bulgaria-100729581"),
    ("Луковит", "lukovit-bulgaria-100729507"),
    ("Лъки", "luki-bulgaria-100729509"),
    ("Любимец", "lyubimets-bulgaria-100729466"),
    ("Люлин", "lyulin-bulgaria-307000011"),
    ("Лясковец", "lyaskovets-bulgaria-100729489"),
    ("Мадан", "madan-bulgaria-100729439"),
    ("Маджарово", "madzharovo-bulgaria-100729428"),
    ("Макреш", "makresh-bulgaria-100729401"),
    ("Малко Търново", "malko-turnovo-bulgaria-100729322"),
    ("Мальовица", "maliovitsa-bulgaria-307000005"),
    ("Медковец", "medkovets-bulgaria-100729174"),
    ("Мездра", "mezdra-bulgaria-100729134"),
    ("Мелник", "melnik-bulgaria-100729159"),
    ("Мизия", "miziya-bulgaria-100729040"),
    ("Минерални бани", "mineralni-bani-bulgaria-100729073"),
    ("Мирково", "mirkovo-bulgaria-100729064"),
    ("Монтана", "montana-bulgaria-100729114"),
    ("Мусала", "musala-bulgaria-305021306"),
    ("Мъглиж", "muglizh-bulgaria-100728928"),
    ("Невестино", "nevestino-bulgaria-100728818"),
    ("Неделино", "nedelino-bulgaria-100728851"),
    ("Несебър", "nesebur-bulgaria-100728825"),
    ("Николаево", "nikolaevo-bulgaria-100728795"),
    ("Никола-Козлево", "nikola-kozlevo-bulgaria-100728791"),
    ("Никопол", "nikopol-bulgaria-100728782"),
    ("Нова Загора", "nova-zagora-bulgaria-100728742"),
    ("Нови пазар", "novi-pazar-bulgaria-100728734"),
    ("Ново село", "novo-selo-bulgaria-100728709"),
    ("Обзор", "obzor-bulgaria-100728674"),
    ("Омуртаг", "omurtag-bulgaria-100728634"),
    ("Опака", "opaka-bulgaria-100728631"),
    ("Опан", "opan-bulgaria-100728627"),
    ("Оряхово", "oryakhovo-bulgaria-100728565"),
    ("Павел баня", "pavel-banya-bulgaria-100728389"),
    ("Павликени", "pavlikeni-bulgaria-100728385"),
    ("Пазарджик", "pazardzhik-bulgaria-100728378"),
    ("Пампорово", "pamporovo-bulgaria-211002088"),
    ("Панагюрище", "panagyurishte-bulgaria-100728448"),
    ("Перник", "pernik-bulgaria-100728330"),
    ("Перущица", "perushtitsa-bulgaria-100728321"),
    ("Петрич", "petrich-bulgaria-100728288"),
    ("Пещера", "peshtera-bulgaria-100728317"),
    ("Пирдоп", "pirdop-bulgaria-100728251"),
    ("Плевен", "pleven-bulgaria-100728203"),
    ("Плиска", "pliska-bulgaria-100728199"),
    ("Пловдив", "plovdiv-bulgaria-100728193"),
    ("Полски Тръмбеш", "polski-trumbesh-bulgaria-100728124"),
    ("Поморие", "pomorie-bulgaria-100728108"),
    ("Попово", "popovo-bulgaria-100728075"),
    ("Пордим", "pordim-bulgaria-100728056"),
    ("Правец", "pravets-bulgaria-100728011"),
    ("Приморско", "primorsko-bulgaria-100727964"),
    ("Провадия", "provadiya-bulgaria-100727921"),
    ("Равда", "ravda-bulgaria-100727759"),
    ("Раднево", "radnevo-bulgaria-100727838"),
    ("Радомир", "radomir-bulgaria-100727832"),
    ("Разград", "razgrad-bulgaria-100727696"),
    ("Разлог", "razlog-bulgaria-100727689"),
    ("Ракитово", "rakitovo-bulgaria-100727801"),
    ("Раковски", "rakovski-bulgaria-100727791"),
    ("Резово", "rezovo-bulgaria-100727649"),
    ("Рила", "rila-bulgaria-100727628"),
    ("Роман", "roman-bulgaria-100727598"),
    ("Рудозем", "rudozem-bulgaria-100727552"),
    ("Руен", "ruen-bulgaria-100727547"),
    ("Ружинци", "ruzhintsi-bulgaria-100727495"),
    ("Русе", "ruse-bulgaria-100727523"),
    ("Садово", "sadovo-bulgaria-100727479"),
    ("Самоков", "samokov-bulgaria-100727462"),
    ("Самуил", "samuil-bulgaria-100727455"),
    ("Сандански", "sandanski-bulgaria-100727447"),
    ("Сапарева баня", "sapareva-banya-bulgaria-100727441"),
    ("Сарафово", "sarafovo-bulgaria-100727434"),
    ("Сатовча", "satovcha-bulgaria-100727423"),
    ("Свети Влас", "sveti-vlas-bulgaria-100725816"),
    ("Свиленград", "svilengrad-bulgaria-100726546"),
    ("Свищов", "svishtov-bulgaria-100726534"),
    ("Своге", "svoge-bulgaria-100726524"),
    ("Севлиево", "sevlievo-bulgaria-100727337"),
    ("Сеново", "senovo-bulgaria-100727358"),
    ("Септември", "septemvri-bulgaria-100727354"),
    ("Силистра", "silistra-bulgaria-100727221"),
    ("Симеоновград", "simeonovgrad-bulgaria-100727217"),
    ("Симитли", "simitli-bulgaria-100727212"),
    ("Синеморец", "sinemorets-bulgaria-100727201"),
    ("Ситово", "sitovo-bulgaria-100727175"),
    ("Славяново", "slavyanovo-bulgaria-100727087"),
    ("Сливен", "sliven-bulgaria-100727079"),
    ("Сливница", "slivnitsa-bulgaria-100727069"),
    ("Сливо Поле", "slivo-pole-bulgaria-100727067"),
    ("Слънчев бряг", "sunny-beach-bulgaria-106355005"),
    ("Смолян", "smolyan-bulgaria-100727030"),
    ("Смядово", "smyadovo-bulgaria-100727025"),
    ("Созопол", "sozopol-bulgaria-100726963"),
    ("София", "sofia-bulgaria-100727011"),
    ("Средец", "sredets-bulgaria-100731016"),
    ("Стамболийски", "stamboliyski-bulgaria-100726890"),
    ("Стамболово", "stambolovo-bulgaria-100726888"),
    ("Стара Загора", "stara-zagora-bulgaria-100726848"),
    ("Стара Кресна", "stara-kresna-bulgaria-100726863"),
    ("Стражица", "strazhitsa-bulgaria-100726727"),
    ("Стралджа", "straldzha-bulgaria-100726748"),
    ("Стрелча", "strelcha-bulgaria-100726723"),
    ("Струмяни", "strumyani-bulgaria-100726693"),
    ("Суворово", "suvorovo-bulgaria-100726591"),
    ("Сунгурларе", "sungurlare-bulgaria-100726629"),
    ("Сухиндол", "sukhindol-bulgaria-100726643"),
    ("Съединение", "suedinenie-bulgaria-100726657"),
    ("Твърдица", "tvurditsa-bulgaria-100726130"),
    ("Тервел", "tervel-bulgaria-100726474"),
    ("Тетевен", "teteven-bulgaria-100726464"),
    ("Тодорка", "todorka-bulgaria-307000012"),
    ("Тончевци", "tonchevtsi-bulgaria-100726409"),
    ("Тополовград", "topolovgrad-bulgaria-100726384"),
    ("Трекляно", "treklyano-bulgaria-100726352"),
    ("Троян", "troyan-bulgaria-100726320"),
    ("Трън", "trun-bulgaria-100726307"),
    ("Трявна", "tryavna-bulgaria-100726287"),
    ("Тутракан", "tutrakan-bulgaria-100726141"),
    ("Търговище", "turgovishte-bulgaria-100726174"),
    ("Угърчин", "ugurchin-bulgaria-100726114"),
    ("Узана", "uzana-bulgaria-307000003"),
    ("Хаджидимово", "khadzhidimovo-bulgaria-100730464"),
    ("Хайредин", "khayredin-bulgaria-100730425"),
    ("Харманли", "kharmanli-bulgaria-100730442"),
    ("Хасково", "haskovo-bulgaria-100730435"),
    ("Хисаря", "khisarya-bulgaria-100730419"),
    ("Царево", "tsarevo-bulgaria-100729125"),
    ("Цар Калоян", "tsar-kaloyan-bulgaria-100730415"),
    ("Ценово", "tsenovo-bulgaria-100726245"),
    ("Чавдар", "chavdar-bulgaria-100732655"),
    ("Челопеч", "chelopech-bulgaria-100732636"),
    ("Чепеларе", "chepelare-bulgaria-100732627"),
    ("Червен бряг", "cherven-bryag-bulgaria-100732491"),
    ("Черни връх", "cherni-vrah-bulgaria-307000006"),
    ("Черноморец", "chernomorets-bulgaria-100732519"),
    ("Черноочене", "chernoochene-bulgaria-100732517"),
    ("Чипровци", "chiprovtsi-bulgaria-100732456"),
    ("Чирпан", "chirpan-bulgaria-100732452"),
    ("Чупрене", "chuprene-bulgaria-100732400"),
    ("Шабла", "shabla-bulgaria-100727329"),
    ("Шипка", "shipka-bulgaria-100727291"),
    ("Шумен", "shumen-bulgaria-100727233"),
    ("Ябланица", "yablanitsa-bulgaria-100725611"),
    ("Якимово", "yakimovo-bulgaria-100725588"),
    ("Якоруда", "yakoruda-bulgaria-100725586"),
    ("Ямбол", "yambol-bulgaria-100725578"),
];

pub(super) fn bundled_locations() -> Vec<Location> {
    BUNDLED.iter().map(|(name, id)| Location::new(*name, *id)).collect()
}
